pub mod check;
pub mod init;
pub mod languages;
pub mod resolve;
pub mod set;
pub mod translate;
