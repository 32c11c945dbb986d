mod init_logging;
mod load_dotenv;
mod read_input;

pub use init_logging::init_logging;
pub use load_dotenv::load_dotenv;
pub use read_input::read_input;
