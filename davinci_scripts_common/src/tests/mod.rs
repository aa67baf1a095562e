mod file_utils;
mod target;
mod utils;
