//! Customer record operations
//!
//! `CustomerLedger` wraps the customer file and provides account creation,
//! lookup, update, delete and the two balance transfers.
//!
//! # Balance rules
//!
//! - initial deposit and every deposit: digits only, `MIN_DEPOSIT..=MAX_DEPOSIT`
//! - withdrawal: refused outright when the balance is at or below
//!   `MIN_BALANCE`; otherwise the amount must be a positive integer and the
//!   remaining balance must stay at or above `MIN_BALANCE`
//! - deposit and withdrawal run every check first, then ask for
//!   confirmation, then mutate and persist together

use crate::core::operations::{delete_where, ordered, update_by_key};
use crate::core::store::{next_key, FlatFileStore};
use crate::core::validator::{
    check_address, check_alphabetic, check_national_id, check_numeric, check_phone, is_numeric,
};
use crate::types::{
    AccountNumber, Balance, BalanceOutcome, BalancePreview, Confirmation, Customer,
    CustomerChanges, CustomerFilter, CustomerQuery, DeleteOutcome, NewCustomer, RecordError,
    ViewOrder, MAX_DEPOSIT, MIN_BALANCE, MIN_DEPOSIT,
};
use std::path::PathBuf;
use tracing::{debug, info};

/// Operations over the customer file
#[derive(Debug, Clone)]
pub struct CustomerLedger {
    store: FlatFileStore<Customer>,
}

impl CustomerLedger {
    pub fn new(store: FlatFileStore<Customer>) -> Self {
        CustomerLedger { store }
    }

    /// Ledger over the file at `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FlatFileStore::new(path))
    }

    pub fn store(&self) -> &FlatFileStore<Customer> {
        &self.store
    }

    /// Validate and append a new customer account
    ///
    /// Fields are checked in the order name, national id, phone, initial
    /// deposit, address. The account number is the last record's account
    /// + 1 (1 for an empty file).
    pub fn create(&self, draft: NewCustomer) -> Result<Customer, RecordError> {
        check_alphabetic("name", &draft.name)?;
        check_national_id(&draft.national_id)?;
        check_phone(&draft.phone)?;
        let balance = parse_initial_deposit(&draft.initial_deposit)?;
        check_address(&draft.address)?;

        let records = self.store.load_or_empty();
        let customer = Customer {
            account: next_key(&records)?,
            name: draft.name,
            national_id: draft.national_id,
            phone: draft.phone,
            balance,
            address: draft.address,
        };
        self.store.append(&customer)?;

        info!(account = customer.account, balance, "Created customer");
        Ok(customer)
    }

    /// All customers in file order or reverse file order
    pub fn list(&self, order: ViewOrder) -> Vec<Customer> {
        ordered(self.store.load_or_empty(), order)
    }

    /// First customer matching `query`, if any
    pub fn search(&self, query: &CustomerQuery) -> Option<Customer> {
        self.store
            .load_or_empty()
            .into_iter()
            .find(|customer| query.matches(customer))
    }

    /// Replace fields of the customer with `account`
    ///
    /// All supplied fields are validated before the file is read, then
    /// applied in the order name, national id, phone, address, balance. An
    /// unknown account still rewrites the unchanged collection.
    pub fn update(
        &self,
        account: AccountNumber,
        changes: CustomerChanges,
    ) -> Result<Customer, RecordError> {
        if changes.is_empty() {
            return Err(RecordError::validation_failed(
                "update",
                "no fields to update",
            ));
        }
        if let Some(name) = &changes.name {
            check_alphabetic("name", name)?;
        }
        if let Some(national_id) = &changes.national_id {
            check_national_id(national_id)?;
        }
        if let Some(phone) = &changes.phone {
            check_phone(phone)?;
        }
        if let Some(address) = &changes.address {
            check_address(address)?;
        }
        let balance = changes.balance.as_deref().map(parse_balance).transpose()?;

        update_by_key(&self.store, account, |customer| {
            if let Some(name) = changes.name {
                customer.name = name;
            }
            if let Some(national_id) = changes.national_id {
                customer.national_id = national_id;
            }
            if let Some(phone) = changes.phone {
                customer.phone = phone;
            }
            if let Some(address) = changes.address {
                customer.address = address;
            }
            if let Some(balance) = balance {
                customer.balance = balance;
            }
            Ok(())
        })
    }

    /// Remove customers selected by `filter`
    ///
    /// `confirm` is consulted only for `CustomerFilter::All`, after the store
    /// is known to be non-empty; it receives the number of records.
    pub fn delete<F>(
        &self,
        filter: &CustomerFilter,
        confirm: F,
    ) -> Result<DeleteOutcome, RecordError>
    where
        F: FnOnce(usize) -> Confirmation,
    {
        delete_where(
            &self.store,
            matches!(filter, CustomerFilter::All),
            |customer| filter.matches(customer),
            confirm,
        )
    }

    /// Credit `amount` to `account`
    ///
    /// # Errors
    ///
    /// - `StoreEmpty` / `RecordNotFound` if the account cannot be located
    /// - `InvalidOperand` if `amount` is not digits or is outside
    ///   `MIN_DEPOSIT..=MAX_DEPOSIT`
    /// - `ArithmeticOverflow` if the new balance does not fit
    pub fn deposit<F>(
        &self,
        account: AccountNumber,
        amount: &str,
        confirm: F,
    ) -> Result<BalanceOutcome, RecordError>
    where
        F: FnOnce(&BalancePreview) -> Confirmation,
    {
        let mut records = self.store.load_or_empty();
        let index = locate(&records, account)?;
        let customer = &records[index];

        let amount = parse_deposit_amount(amount)?;
        let resulting = customer
            .balance
            .checked_add(amount)
            .ok_or_else(|| RecordError::arithmetic_overflow("deposit", account))?;

        self.apply_confirmed(&mut records, index, amount, resulting, confirm)
    }

    /// Debit `amount` from `account`, keeping at least `MIN_BALANCE`
    ///
    /// # Errors
    ///
    /// - `StoreEmpty` / `RecordNotFound` if the account cannot be located
    /// - `InsufficientFunds` if the balance is already at or below the floor,
    ///   or the withdrawal would take it below the floor
    /// - `InvalidOperand` if `amount` is not a positive integer
    pub fn withdraw<F>(
        &self,
        account: AccountNumber,
        amount: &str,
        confirm: F,
    ) -> Result<BalanceOutcome, RecordError>
    where
        F: FnOnce(&BalancePreview) -> Confirmation,
    {
        let mut records = self.store.load_or_empty();
        let index = locate(&records, account)?;
        let customer = &records[index];

        if customer.balance <= MIN_BALANCE {
            return Err(RecordError::insufficient_funds(
                account,
                customer.balance,
                None,
            ));
        }

        let amount = parse_withdrawal_amount(amount)?;
        let resulting = customer
            .balance
            .checked_sub(amount)
            .ok_or_else(|| RecordError::arithmetic_overflow("withdrawal", account))?;
        if resulting < MIN_BALANCE {
            return Err(RecordError::insufficient_funds(
                account,
                customer.balance,
                Some(amount),
            ));
        }

        self.apply_confirmed(&mut records, index, amount, resulting, confirm)
    }

    /// Ask for confirmation, then set the new balance and save everything
    fn apply_confirmed<F>(
        &self,
        records: &mut [Customer],
        index: usize,
        amount: Balance,
        resulting: Balance,
        confirm: F,
    ) -> Result<BalanceOutcome, RecordError>
    where
        F: FnOnce(&BalancePreview) -> Confirmation,
    {
        let customer = &records[index];
        let preview = BalancePreview {
            account: customer.account,
            name: customer.name.clone(),
            balance: customer.balance,
            amount,
            resulting,
        };

        if !confirm(&preview).is_affirmed() {
            debug!(account = preview.account, "Balance change cancelled");
            return Ok(BalanceOutcome::Cancelled);
        }

        records[index].balance = resulting;
        self.store.save_all(records)?;

        info!(
            account = preview.account,
            previous = preview.balance,
            balance = resulting,
            "Balance updated"
        );
        Ok(BalanceOutcome::Applied {
            account: preview.account,
            previous: preview.balance,
            balance: resulting,
        })
    }
}

/// Index of the first record with `account`
fn locate(records: &[Customer], account: AccountNumber) -> Result<usize, RecordError> {
    if records.is_empty() {
        return Err(RecordError::store_empty("Customer"));
    }
    records
        .iter()
        .position(|c| c.account == account)
        .ok_or_else(|| RecordError::not_found("Customer", account))
}

/// Digits-only amount, parsed; `None` when it does not fit a balance
fn parse_digits(text: &str) -> Option<Option<Balance>> {
    is_numeric(text).then(|| text.parse().ok())
}

fn parse_initial_deposit(text: &str) -> Result<Balance, RecordError> {
    let amount = match parse_digits(text) {
        None => {
            return Err(RecordError::validation_failed(
                "deposit",
                "must contain only digits",
            ))
        }
        Some(amount) => amount.unwrap_or(Balance::MAX),
    };
    if amount < MIN_DEPOSIT {
        return Err(RecordError::validation_failed(
            "deposit",
            "must be at least 1000",
        ));
    }
    if amount > MAX_DEPOSIT {
        return Err(RecordError::validation_failed(
            "deposit",
            "cannot exceed 50000",
        ));
    }
    Ok(amount)
}

fn parse_balance(text: &str) -> Result<Balance, RecordError> {
    check_numeric("balance", text)?;
    text.parse()
        .map_err(|_| RecordError::validation_failed("balance", "is too large"))
}

fn parse_deposit_amount(text: &str) -> Result<Balance, RecordError> {
    match parse_digits(text) {
        None => Err(RecordError::invalid_operand(
            text,
            "must contain only digits",
        )),
        Some(Some(amount)) if (MIN_DEPOSIT..=MAX_DEPOSIT).contains(&amount) => Ok(amount),
        Some(_) => Err(RecordError::invalid_operand(
            text,
            "deposit must be between 1000 and 50000",
        )),
    }
}

fn parse_withdrawal_amount(text: &str) -> Result<Balance, RecordError> {
    match parse_digits(text) {
        None => Err(RecordError::invalid_operand(
            text,
            "must contain only digits",
        )),
        Some(None) => Err(RecordError::invalid_operand(text, "amount is too large")),
        Some(Some(0)) => Err(RecordError::invalid_operand(
            text,
            "must be greater than zero",
        )),
        Some(Some(amount)) => Ok(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    const BOOK: &str = "1|Asha Rao|111122223333|9000000001|1500|MG Road\n\
                        2|Ravi Kumar|444455556666|9000000002|1000|Park Street\n\
                        3|Meena Iyer|777788889999|9000000003|20000|Hill View\n";

    fn ledger_with(dir: &TempDir, content: &str) -> CustomerLedger {
        let path = dir.path().join("customers.txt");
        fs::write(&path, content).unwrap();
        CustomerLedger::open(path)
    }

    fn draft(initial_deposit: &str) -> NewCustomer {
        NewCustomer {
            name: "Nina Paul".to_string(),
            national_id: "123412341234".to_string(),
            phone: "9876543210".to_string(),
            initial_deposit: initial_deposit.to_string(),
            address: "4 Lake Road".to_string(),
        }
    }

    fn yes(_: &BalancePreview) -> Confirmation {
        Confirmation::Affirmed
    }

    fn no(_: &BalancePreview) -> Confirmation {
        Confirmation::Declined
    }

    fn balance_of(ledger: &CustomerLedger, account: AccountNumber) -> Balance {
        ledger
            .search(&CustomerQuery::Account(account))
            .map(|c| c.balance)
            .unwrap()
    }

    #[test]
    fn test_create_appends_with_next_account() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        let customer = ledger.create(draft("5000")).unwrap();

        assert_eq!(customer.account, 4);
        assert_eq!(customer.balance, 5000);
        assert!(fs::read_to_string(ledger.store().path())
            .unwrap()
            .ends_with("4|Nina Paul|123412341234|9876543210|5000|4 Lake Road\n"));
    }

    #[test]
    fn test_create_in_new_file_starts_at_one() {
        let dir = TempDir::new().unwrap();
        let ledger = CustomerLedger::open(dir.path().join("customers.txt"));

        assert_eq!(ledger.create(draft("1000")).unwrap().account, 1);
    }

    #[rstest]
    #[case::below_min("999", "must be at least 1000")]
    #[case::above_max("50001", "cannot exceed 50000")]
    #[case::huge("99999999999999999999999", "cannot exceed 50000")]
    #[case::not_digits("10a0", "must contain only digits")]
    #[case::empty("", "must contain only digits")]
    fn test_create_rejects_initial_deposit(#[case] amount: &str, #[case] reason: &str) {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        let result = ledger.create(draft(amount));

        assert_eq!(result, Err(RecordError::validation_failed("deposit", reason)));
        assert_eq!(fs::read_to_string(ledger.store().path()).unwrap(), BOOK);
    }

    #[rstest]
    #[case::short_national_id(NewCustomer { national_id: "12345".to_string(), ..draft("1000") }, "aadhaar")]
    #[case::long_phone(NewCustomer { phone: "98765432101".to_string(), ..draft("1000") }, "phone")]
    #[case::numeric_name(NewCustomer { name: "N1na".to_string(), ..draft("1000") }, "name")]
    #[case::empty_address(NewCustomer { address: String::new(), ..draft("1000") }, "address")]
    #[case::address_with_delimiter(NewCustomer { address: "A|B".to_string(), ..draft("1000") }, "address")]
    fn test_create_rejects_invalid_fields(#[case] input: NewCustomer, #[case] field: &str) {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        let result = ledger.create(input);

        assert!(
            matches!(&result, Err(RecordError::ValidationFailed { field: f, .. }) if f == field),
            "unexpected result {:?}",
            result
        );
    }

    #[rstest]
    #[case::account(CustomerQuery::Account(2), Some(2))]
    #[case::national_id(CustomerQuery::NationalId("777788889999".to_string()), Some(3))]
    #[case::phone(CustomerQuery::Phone("9000000001".to_string()), Some(1))]
    #[case::missing(CustomerQuery::Phone("1".to_string()), None)]
    fn test_search(#[case] query: CustomerQuery, #[case] expected: Option<AccountNumber>) {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        assert_eq!(ledger.search(&query).map(|c| c.account), expected);
    }

    #[test]
    fn test_list_descending() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        let accounts: Vec<_> = ledger
            .list(ViewOrder::Descending)
            .iter()
            .map(|c| c.account)
            .collect();

        assert_eq!(accounts, vec![3, 2, 1]);
    }

    #[test]
    fn test_update_phone_and_balance() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        let updated = ledger
            .update(
                2,
                CustomerChanges {
                    phone: Some("9111111111".to_string()),
                    balance: Some("75000".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.phone, "9111111111");
        assert_eq!(updated.balance, 75000);
        assert_eq!(balance_of(&ledger, 2), 75000);
    }

    #[test]
    fn test_update_all_text_fields() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        let updated = ledger
            .update(
                1,
                CustomerChanges {
                    name: Some("Asha Menon".to_string()),
                    national_id: Some("000011112222".to_string()),
                    phone: Some("9222222222".to_string()),
                    address: Some("Brigade Road".to_string()),
                    balance: None,
                },
            )
            .unwrap();

        assert_eq!(
            updated,
            Customer {
                account: 1,
                name: "Asha Menon".to_string(),
                national_id: "000011112222".to_string(),
                phone: "9222222222".to_string(),
                balance: 1500,
                address: "Brigade Road".to_string(),
            }
        );
    }

    #[rstest]
    #[case::bad_national_id(CustomerChanges { national_id: Some("12".to_string()), ..Default::default() })]
    #[case::bad_balance(CustomerChanges { balance: Some("-5".to_string()), ..Default::default() })]
    #[case::bad_address(CustomerChanges { address: Some("a\nb".to_string()), ..Default::default() })]
    fn test_update_invalid_value_is_not_persisted(#[case] changes: CustomerChanges) {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        let result = ledger.update(1, changes);

        assert!(matches!(result, Err(RecordError::ValidationFailed { .. })));
        assert_eq!(fs::read_to_string(ledger.store().path()).unwrap(), BOOK);
    }

    #[test]
    fn test_update_not_found_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);
        let before = ledger.list(ViewOrder::Ascending);

        let result = ledger.update(
            77,
            CustomerChanges {
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(result, Err(RecordError::not_found("Customer", 77)));
        assert_eq!(ledger.list(ViewOrder::Ascending), before);
        assert_eq!(fs::read_to_string(ledger.store().path()).unwrap(), BOOK);
    }

    #[rstest]
    #[case::by_account(CustomerFilter::Account(1), DeleteOutcome::Removed(1), vec![2, 3])]
    #[case::by_name(CustomerFilter::Name("RAVI KUMAR".to_string()), DeleteOutcome::Removed(1), vec![1, 3])]
    #[case::by_national_id(CustomerFilter::NationalId("777788889999".to_string()), DeleteOutcome::Removed(1), vec![1, 2])]
    #[case::by_phone(CustomerFilter::Phone("9000000002".to_string()), DeleteOutcome::Removed(1), vec![1, 3])]
    #[case::no_match(CustomerFilter::Account(10), DeleteOutcome::NoMatches, vec![1, 2, 3])]
    fn test_delete_by_filter(
        #[case] filter: CustomerFilter,
        #[case] expected: DeleteOutcome,
        #[case] remaining: Vec<AccountNumber>,
    ) {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        let outcome = ledger.delete(&filter, |_| Confirmation::Declined).unwrap();

        assert_eq!(outcome, expected);
        let accounts: Vec<_> = ledger
            .list(ViewOrder::Ascending)
            .iter()
            .map(|c| c.account)
            .collect();
        assert_eq!(accounts, remaining);
    }

    #[test]
    fn test_delete_all_declined_keeps_file() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        let outcome = ledger
            .delete(&CustomerFilter::All, |_| Confirmation::from_token("NO"))
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(fs::read_to_string(ledger.store().path()).unwrap(), BOOK);
    }

    #[rstest]
    #[case::below_min("999", false)]
    #[case::min("1000", true)]
    #[case::max("50000", true)]
    #[case::above_max("50001", false)]
    fn test_deposit_bounds(#[case] amount: &str, #[case] accepted: bool) {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        let result = ledger.deposit(1, amount, yes);

        if accepted {
            let amount: Balance = amount.parse().unwrap();
            assert_eq!(
                result,
                Ok(BalanceOutcome::Applied {
                    account: 1,
                    previous: 1500,
                    balance: 1500 + amount,
                })
            );
            assert_eq!(balance_of(&ledger, 1), 1500 + amount);
        } else {
            assert!(matches!(result, Err(RecordError::InvalidOperand { .. })));
            assert_eq!(balance_of(&ledger, 1), 1500);
        }
    }

    #[rstest]
    #[case::letters("12ab")]
    #[case::negative("-1000")]
    #[case::empty("")]
    fn test_deposit_rejects_non_numeric(#[case] amount: &str) {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        let result = ledger.deposit(1, amount, yes);

        assert_eq!(
            result,
            Err(RecordError::invalid_operand(amount, "must contain only digits"))
        );
    }

    #[test]
    fn test_deposit_declined_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        let result = ledger.deposit(3, "5000", no);

        assert_eq!(result, Ok(BalanceOutcome::Cancelled));
        assert_eq!(fs::read_to_string(ledger.store().path()).unwrap(), BOOK);
    }

    #[test]
    fn test_deposit_preview_shows_resulting_balance() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);
        let mut shown = None;

        ledger
            .deposit(3, "5000", |preview| {
                shown = Some(preview.clone());
                Confirmation::Declined
            })
            .unwrap();

        assert_eq!(
            shown,
            Some(BalancePreview {
                account: 3,
                name: "Meena Iyer".to_string(),
                balance: 20000,
                amount: 5000,
                resulting: 25000,
            })
        );
    }

    #[test]
    fn test_deposit_unknown_account() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        assert_eq!(
            ledger.deposit(9, "5000", yes),
            Err(RecordError::not_found("Customer", 9))
        );
    }

    #[test]
    fn test_deposit_empty_store() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, "");

        assert_eq!(
            ledger.deposit(1, "5000", yes),
            Err(RecordError::store_empty("Customer"))
        );
    }

    #[test]
    fn test_deposit_overflow() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(
            &dir,
            &format!("1|Rich|111122223333|9000000001|{}|Vault\n", Balance::MAX),
        );

        assert_eq!(
            ledger.deposit(1, "1000", yes),
            Err(RecordError::arithmetic_overflow("deposit", 1))
        );
    }

    #[test]
    fn test_withdraw_floor() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        assert_eq!(
            ledger.withdraw(1, "600", yes),
            Err(RecordError::insufficient_funds(1, 1500, Some(600)))
        );
        assert_eq!(balance_of(&ledger, 1), 1500);

        assert_eq!(
            ledger.withdraw(1, "500", yes),
            Ok(BalanceOutcome::Applied {
                account: 1,
                previous: 1500,
                balance: 1000,
            })
        );
        assert_eq!(balance_of(&ledger, 1), 1000);
    }

    #[test]
    fn test_withdraw_refused_at_floor_before_amount_check() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        assert_eq!(
            ledger.withdraw(2, "not a number", yes),
            Err(RecordError::insufficient_funds(2, 1000, None))
        );
    }

    #[rstest]
    #[case::zero("0", "must be greater than zero")]
    #[case::letters("abc", "must contain only digits")]
    #[case::negative("-10", "must contain only digits")]
    #[case::too_large("99999999999999999999", "amount is too large")]
    fn test_withdraw_rejects_bad_amount(#[case] amount: &str, #[case] reason: &str) {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        assert_eq!(
            ledger.withdraw(3, amount, yes),
            Err(RecordError::invalid_operand(amount, reason))
        );
    }

    #[test]
    fn test_withdraw_declined_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        assert_eq!(ledger.withdraw(3, "1000", no), Ok(BalanceOutcome::Cancelled));
        assert_eq!(fs::read_to_string(ledger.store().path()).unwrap(), BOOK);
    }

    #[test]
    fn test_withdraw_unknown_account() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_with(&dir, BOOK);

        assert_eq!(
            ledger.withdraw(8, "100", yes),
            Err(RecordError::not_found("Customer", 8))
        );
    }
}
