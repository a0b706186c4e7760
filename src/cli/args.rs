use crate::config::{StoreConfig, DEFAULT_CUSTOMER_FILE, DEFAULT_EMPLOYEE_FILE};
use crate::types::{
    AccountNumber, CustomerFilter, CustomerQuery, EmployeeFilter, EmployeeId, EmployeeQuery,
    RecordError, ViewOrder,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Manage employee and customer records stored in pipe-delimited files
#[derive(Parser, Debug)]
#[command(name = "bank-records")]
#[command(about = "Manage employee and customer records stored in pipe-delimited files", long_about = None)]
pub struct CliArgs {
    /// Directory holding the data files and exported reports
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = "BANK_DATA_DIR",
        default_value = ".",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Employee file name inside the data directory
    #[arg(
        long = "employee-file",
        value_name = "FILE",
        default_value = DEFAULT_EMPLOYEE_FILE,
        global = true
    )]
    pub employee_file: String,

    /// Customer file name inside the data directory
    #[arg(
        long = "customer-file",
        value_name = "FILE",
        default_value = DEFAULT_CUSTOMER_FILE,
        global = true
    )]
    pub customer_file: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Record kind to operate on
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Employee records
    #[command(subcommand)]
    Employee(EmployeeCommand),

    /// Customer accounts
    #[command(subcommand)]
    Customer(CustomerCommand),
}

/// Display order for `list`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// File order
    #[default]
    Asc,
    /// Reverse file order
    Desc,
}

impl From<OrderArg> for ViewOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => ViewOrder::Ascending,
            OrderArg::Desc => ViewOrder::Descending,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum EmployeeCommand {
    /// Create a new employee
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: String,
        #[arg(long)]
        designation: String,
    },

    /// Show every employee
    List {
        #[arg(long, value_enum, default_value_t = OrderArg::Asc)]
        order: OrderArg,
    },

    /// Find employees by id, name or designation
    Search(EmployeeKey),

    /// Replace one or more fields of an employee
    Update {
        #[arg(long)]
        id: EmployeeId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        designation: Option<String>,
    },

    /// Delete employees by id, name or designation, or all of them
    Delete {
        #[command(flatten)]
        target: EmployeeTarget,
        /// Skip the confirmation prompt for --all
        #[arg(long)]
        yes: bool,
    },

    /// Write a report to <STEM>.txt in the data directory
    Export {
        #[arg(value_name = "STEM")]
        stem: String,
    },
}

/// Exactly one employee search key
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct EmployeeKey {
    #[arg(long)]
    pub id: Option<EmployeeId>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub designation: Option<String>,
}

/// Exactly one employee delete target
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct EmployeeTarget {
    #[arg(long)]
    pub id: Option<EmployeeId>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub designation: Option<String>,
    /// Delete every employee (asks for confirmation)
    #[arg(long)]
    pub all: bool,
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommand {
    /// Open a new customer account
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "national-id", alias = "aadhaar")]
        national_id: String,
        #[arg(long)]
        phone: String,
        /// Initial deposit (1000 - 50000)
        #[arg(long, value_name = "AMOUNT")]
        deposit: String,
        #[arg(long)]
        address: String,
    },

    /// Show every customer
    List {
        #[arg(long, value_enum, default_value_t = OrderArg::Asc)]
        order: OrderArg,
    },

    /// Find a customer by account, national id or phone
    Search(CustomerKey),

    /// Replace one or more fields of a customer
    Update {
        #[arg(long)]
        account: AccountNumber,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "national-id", alias = "aadhaar")]
        national_id: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        balance: Option<String>,
    },

    /// Delete customers by account, name, national id or phone, or all of them
    Delete {
        #[command(flatten)]
        target: CustomerTarget,
        /// Skip the confirmation prompt for --all
        #[arg(long)]
        yes: bool,
    },

    /// Write a report to <STEM>.txt in the data directory
    Export {
        #[arg(value_name = "STEM")]
        stem: String,
    },

    /// Deposit into an account (1000 - 50000 per transaction)
    Deposit {
        #[arg(long)]
        account: AccountNumber,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Withdraw from an account, keeping the minimum balance
    Withdraw {
        #[arg(long)]
        account: AccountNumber,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Exactly one customer search key
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct CustomerKey {
    #[arg(long)]
    pub account: Option<AccountNumber>,
    #[arg(long = "national-id", alias = "aadhaar")]
    pub national_id: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

/// Exactly one customer delete target
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct CustomerTarget {
    #[arg(long)]
    pub account: Option<AccountNumber>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "national-id", alias = "aadhaar")]
    pub national_id: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Delete every customer (asks for confirmation)
    #[arg(long)]
    pub all: bool,
}

fn missing_key() -> RecordError {
    RecordError::validation_failed("key", "exactly one search or delete key is required")
}

impl CliArgs {
    /// Create a StoreConfig from CLI arguments
    ///
    /// Empty values fall back to the defaults.
    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig::new(
            self.data_dir.clone(),
            self.employee_file.clone(),
            self.customer_file.clone(),
        )
    }
}

impl EmployeeKey {
    pub fn into_query(self) -> Result<EmployeeQuery, RecordError> {
        match (self.id, self.name, self.designation) {
            (Some(id), _, _) => Ok(EmployeeQuery::Id(id)),
            (_, Some(name), _) => Ok(EmployeeQuery::Name(name)),
            (_, _, Some(designation)) => Ok(EmployeeQuery::Designation(designation)),
            _ => Err(missing_key()),
        }
    }
}

impl EmployeeTarget {
    pub fn into_filter(self) -> Result<EmployeeFilter, RecordError> {
        if self.all {
            return Ok(EmployeeFilter::All);
        }
        match (self.id, self.name, self.designation) {
            (Some(id), _, _) => Ok(EmployeeFilter::Id(id)),
            (_, Some(name), _) => Ok(EmployeeFilter::Name(name)),
            (_, _, Some(designation)) => Ok(EmployeeFilter::Designation(designation)),
            _ => Err(missing_key()),
        }
    }
}

impl CustomerKey {
    pub fn into_query(self) -> Result<CustomerQuery, RecordError> {
        match (self.account, self.national_id, self.phone) {
            (Some(account), _, _) => Ok(CustomerQuery::Account(account)),
            (_, Some(national_id), _) => Ok(CustomerQuery::NationalId(national_id)),
            (_, _, Some(phone)) => Ok(CustomerQuery::Phone(phone)),
            _ => Err(missing_key()),
        }
    }
}

impl CustomerTarget {
    pub fn into_filter(self) -> Result<CustomerFilter, RecordError> {
        if self.all {
            return Ok(CustomerFilter::All);
        }
        match (self.account, self.name, self.national_id, self.phone) {
            (Some(account), _, _, _) => Ok(CustomerFilter::Account(account)),
            (_, Some(name), _, _) => Ok(CustomerFilter::Name(name)),
            (_, _, Some(national_id), _) => Ok(CustomerFilter::NationalId(national_id)),
            (_, _, _, Some(phone)) => Ok(CustomerFilter::Phone(phone)),
            _ => Err(missing_key()),
        }
    }
}
