use qv_client::Session;

pub fn run() -> Result<(), String> {
    let mut session = Session::load_default();
    if !session.is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }
    session.logout().map_err(|e| e.to_string())?;
    println!("Logged out.");
    Ok(())
}
