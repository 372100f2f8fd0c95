pub mod check;
pub mod get;
pub mod init;
pub mod list;
pub mod url;
