/// A macro for config structs defined in `mmreport`. This macro generates a function that
/// can insert toml comments created from doc comments on fields.
///
/// # Attributes
/// - `#[child = true]`: writes the doc comments for all fields in the child struct.
///
/// # Invariants
/// Required for this macro to work:
///
/// - struct must implement [`Default`] and `serde`
/// - None of the fields can be [`Option`]
///
/// # Documentation
/// Consider using the following style when adding documentation:
///
/// ```rust
/// struct Config {
///     /// BRIEF DESCRIPTION.
///     ///
///     /// (optional) LONGER DESCRIPTION.
//      ///
///     /// Type         | (optional) FIELD TYPE
///     /// Valid values | EXPRESSION REPRESENTING VALID VALUES
///     /// Examples     | (optional) A FEW EXAMPLE VALUES
///     field: (),
/// }
/// ```
///
/// For example:
/// ```rust
/// struct Config {
///     /// The resolution of written charts.
///     ///
///     /// Type         | Number
///     /// Valid values | 1..=2400
///     /// Examples     | 100, 300
///     dpi: u32,
/// }
/// ```
///
/// Language for types:
///
/// | Rust type    | Wording used in docs      |
/// |--------------|---------------------------|
/// | bool         | boolean
/// | u{8-64}      | Number
/// | str, String  | String
/// | `PathBuf`    | Path
/// | enum, struct | `DataStructureName` (e.g. `Level`) or $DESCRIPTION
///
/// # Field documentation length
/// Add newlines when a documentation line crosses ~70 characters, around this long:
///
/// `----------------------------------------------------------------------`
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[child = $child:literal])?
                $(#[doc = $doc:expr])*
                $(##[$field_meta:meta])*
                pub $field:ident: $field_ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $(
                $(#[doc = $doc])*
                $(#[$field_meta])*
                pub $field: $field_ty,
            )*
        }

        impl $name {
            /// Write the doc comments of every field into `doc` as toml comments.
            ///
            /// # Panics
            /// Panics if `doc` was not serialized from this type.
            pub fn write_docs(doc: &mut dyn ::toml_edit::TableLike) {
                $(
                    {
                        let key_str = &stringify!($field);

                        let field_prefix = [ $(
                          format!("##{}\n", $doc),
                        )*].concat();

                        $(
                        if $child {
                            <$field_ty>::write_docs(doc.get_key_value_mut(&key_str).unwrap().1.as_table_like_mut().unwrap());
                        }
                        )?

                        if let Some(table) = doc.entry(&key_str).or_insert_with(|| panic!()).as_table_mut() {
                            table.decor_mut().set_prefix(format!("\n{}", field_prefix));
                        } else {
                            doc.key_mut(&key_str).unwrap().leaf_decor_mut().set_prefix(field_prefix);
                        }
                    }
                )*
            }
        }
    };
}

pub(crate) use config_struct;
