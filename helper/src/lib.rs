#![doc = include_str!("../README.md")]

//---------------------------------------------------------------------------------------------------- Public API
#[cfg(feature = "cast")]
pub mod cast;

#[cfg(feature = "fmt")]
pub mod fmt;

#[cfg(feature = "num")]
pub mod num;
//---------------------------------------------------------------------------------------------------- Private Usage

//----------------------------------------------------------------------------------------------------
