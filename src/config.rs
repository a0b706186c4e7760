//! Store configuration
//!
//! Where the two backing files live. Values come from the command line (or
//! the `BANK_DATA_DIR` environment variable) and fall back to the defaults
//! below.

use std::path::{Path, PathBuf};

/// Default employee file name
pub const DEFAULT_EMPLOYEE_FILE: &str = "employees.txt";

/// Default customer file name
pub const DEFAULT_CUSTOMER_FILE: &str = "customers.txt";

/// Locations of the backing files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding both files and any exported reports
    pub data_dir: PathBuf,
    pub employee_file: String,
    pub customer_file: String,
}

impl StoreConfig {
    /// Build a config, replacing empty values with defaults
    pub fn new(data_dir: PathBuf, employee_file: String, customer_file: String) -> Self {
        let default = Self::default();
        StoreConfig {
            data_dir: if data_dir.as_os_str().is_empty() {
                default.data_dir
            } else {
                data_dir
            },
            employee_file: if employee_file.trim().is_empty() {
                default.employee_file
            } else {
                employee_file
            },
            customer_file: if customer_file.trim().is_empty() {
                default.customer_file
            } else {
                customer_file
            },
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn employee_path(&self) -> PathBuf {
        self.data_dir.join(&self.employee_file)
    }

    pub fn customer_path(&self) -> PathBuf {
        self.data_dir.join(&self.customer_file)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: PathBuf::from("."),
            employee_file: DEFAULT_EMPLOYEE_FILE.to_string(),
            customer_file: DEFAULT_CUSTOMER_FILE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_paths() {
        let config = StoreConfig::default();
        assert_eq!(config.employee_path(), PathBuf::from("./employees.txt"));
        assert_eq!(config.customer_path(), PathBuf::from("./customers.txt"));
    }

    #[rstest]
    #[case::all_custom("/srv/bank", "staff.db", "clients.db", "/srv/bank/staff.db", "/srv/bank/clients.db")]
    #[case::empty_values_fall_back("", " ", "", "./employees.txt", "./customers.txt")]
    fn test_new_with_fallbacks(
        #[case] dir: &str,
        #[case] employee_file: &str,
        #[case] customer_file: &str,
        #[case] employee_path: &str,
        #[case] customer_path: &str,
    ) {
        let config = StoreConfig::new(
            PathBuf::from(dir),
            employee_file.to_string(),
            customer_file.to_string(),
        );
        assert_eq!(config.employee_path(), PathBuf::from(employee_path));
        assert_eq!(config.customer_path(), PathBuf::from(customer_path));
    }
}
