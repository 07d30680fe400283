//! Application configuration for the API service

use anyhow::Result;
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Directory where uploaded cover images are stored
    pub image_dir: String,
    /// Admin login email, checked before any store lookup
    pub admin_email: String,
    /// Admin login password
    pub admin_password: String,
}

impl AppConfig {
    /// Create a new AppConfig from environment variables
    ///
    /// # Environment Variables
    /// - `BIND_ADDRESS`: server bind address (default: `0.0.0.0:8000`)
    /// - `IMAGE_DIR`: cover image directory (default: `images`)
    /// - `ADMIN_EMAIL`: admin login email (default: `admin@gmail.com`)
    /// - `ADMIN_PASSWORD`: admin login password (default: `12345678`)
    pub fn from_env() -> Result<Self> {
        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        let image_dir = env::var("IMAGE_DIR").unwrap_or_else(|_| "images".to_string());

        let admin_email =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@gmail.com".to_string());

        let admin_password =
            env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "12345678".to_string());

        Ok(AppConfig {
            bind_address,
            image_dir,
            admin_email,
            admin_password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_app_config_defaults() {
        unsafe {
            std::env::remove_var("BIND_ADDRESS");
            std::env::remove_var("IMAGE_DIR");
            std::env::remove_var("ADMIN_EMAIL");
            std::env::remove_var("ADMIN_PASSWORD");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.image_dir, "images");
        assert_eq!(config.admin_email, "admin@gmail.com");
        assert_eq!(config.admin_password, "12345678");
    }

    #[test]
    #[serial]
    fn test_app_config_from_env_with_custom_values() {
        unsafe {
            std::env::set_var("BIND_ADDRESS", "127.0.0.1:9000");
            std::env::set_var("IMAGE_DIR", "/var/lib/bookbay/images");
            std::env::set_var("ADMIN_EMAIL", "root@example.com");
            std::env::set_var("ADMIN_PASSWORD", "hunter2");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.image_dir, "/var/lib/bookbay/images");
        assert_eq!(config.admin_email, "root@example.com");
        assert_eq!(config.admin_password, "hunter2");

        // Clean up
        unsafe {
            std::env::remove_var("BIND_ADDRESS");
            std::env::remove_var("IMAGE_DIR");
            std::env::remove_var("ADMIN_EMAIL");
            std::env::remove_var("ADMIN_PASSWORD");
        }
    }
}
