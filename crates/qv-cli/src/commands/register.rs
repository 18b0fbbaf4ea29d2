use qv_client::ApiClient;

pub fn run(
    api_url: &str,
    username: &str,
    display_name: Option<&str>,
    password: Option<&str>,
) -> Result<(), String> {
    let password = match password {
        Some(p) => p.to_string(),
        None => super::prompt("Password")?,
    };

    let client = ApiClient::new(api_url).map_err(|e| e.to_string())?;
    client
        .register(username, &password, display_name)
        .map_err(|e| e.to_string())?;
    println!("Account created.");

    super::login::run(api_url, username, Some(&password))
}
