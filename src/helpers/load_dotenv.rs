pub fn load_dotenv() {
    // The logger is not up yet, and stdout carries command output
    match dotenv::dotenv() {
        Ok(path) => eprintln!("Loaded {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("Ignoring unreadable .env: {e}"),
    }
}
