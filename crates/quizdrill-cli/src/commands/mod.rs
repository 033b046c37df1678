pub mod ask;
pub mod init;
pub mod play;
