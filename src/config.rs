use std::env::var;

use dotenvy::dotenv;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Ok(Config {
            host: var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: var("PORT")
                .unwrap_or_else(|_| "5050".to_string())
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            database_path: var("DATABASE_PATH").unwrap_or_else(|_| "signups.db".to_string()),
            admin_username: var("ADMIN_USERNAME")
                .map_err(|_| "An error occured while getting ADMIN_USERNAME env param")?,
            admin_password: var("ADMIN_PASSWORD")
                .map_err(|_| "An error occured while getting ADMIN_PASSWORD env param")?,
        })
    }
}
