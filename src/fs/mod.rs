pub mod file_list;
pub mod log_files;
