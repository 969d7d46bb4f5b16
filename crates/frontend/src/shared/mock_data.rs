//! Демонстрационные данные для списков страниц
//!
//! Каждая страница заполняет свои списки отсюда при открытии;
//! ничего не сохраняется между перезагрузками.

use contracts::domain::a001_account::aggregate::{Account, AccountDto, AccountId, AccountKind};
use contracts::domain::a002_invoice::aggregate::{Invoice, InvoiceDto, InvoiceStatus};
use contracts::domain::a003_project::aggregate::{Project, ProjectDto, ProjectId, ProjectStatus};
use contracts::domain::a004_time_entry::aggregate::{TimeEntry, TimeEntryDto};
use contracts::domain::a005_bank_account::aggregate::{BankAccount, BankAccountDto, BankAccountId};
use contracts::domain::a006_bank_transaction::aggregate::{
    BankTransaction, BankTransactionDto, Direction,
};
use contracts::domain::a007_purchase_order::aggregate::{
    PurchaseOrder, PurchaseOrderDto, PurchaseOrderLine, PurchaseOrderStatus,
};
use contracts::domain::a008_sales_order::aggregate::{
    SalesOrder, SalesOrderDto, SalesOrderLine, SalesOrderStatus,
};
use contracts::domain::common::{AggregateId, FormRecord};
use contracts::shared::record_list::RecordList;
use contracts::system::roles::{Permission, Role, RoleDto, RoleId};
use contracts::system::users::{User, UserDto};
use rust_decimal::Decimal;

/// 2024-01-01 00:00:00 UTC, мс: ID демо-записей отсчитываются от него
const BASE_ID: i64 = 1_704_067_200_000;

const CUSTOMER_NORTHWIND: AccountId = AccountId(BASE_ID + 101);
const CUSTOMER_CONTOSO: AccountId = AccountId(BASE_ID + 102);
const SUPPLIER_FABRIKAM: AccountId = AccountId(BASE_ID + 103);
const SUPPLIER_LITWARE: AccountId = AccountId(BASE_ID + 104);

const PROJECT_PORTAL: ProjectId = ProjectId(BASE_ID + 301);
const PROJECT_AUDIT: ProjectId = ProjectId(BASE_ID + 302);

const BANK_OPERATING: BankAccountId = BankAccountId(BASE_ID + 501);
const BANK_SAVINGS: BankAccountId = BankAccountId(BASE_ID + 502);

const ROLE_ADMIN: RoleId = RoleId(BASE_ID + 901);
const ROLE_ACCOUNTANT: RoleId = RoleId(BASE_ID + 902);

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn seed<T: FormRecord>(rows: Vec<(i64, T::Dto)>) -> RecordList<T> {
    let items = rows
        .into_iter()
        .filter_map(|(id, dto)| match T::from_dto(T::Id::new(id), &dto) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("mock record {} skipped: {}", id, e);
                None
            }
        })
        .collect();
    RecordList::new(items)
}

pub fn accounts() -> RecordList<Account> {
    let account = |code: &str, name: &str, kind: AccountKind, email: &str, tax_id: &str| AccountDto {
        code: code.into(),
        description: name.into(),
        kind,
        email: email.into(),
        phone: String::new(),
        tax_id: tax_id.into(),
        comment: None,
    };
    seed(vec![
        (CUSTOMER_NORTHWIND.0, account("C-001", "Northwind Traders", AccountKind::Customer, "billing@northwind.example", "7701234567")),
        (CUSTOMER_CONTOSO.0, account("C-002", "Contoso Ltd", AccountKind::Customer, "ap@contoso.example", "")),
        (SUPPLIER_FABRIKAM.0, account("S-001", "Fabrikam Supplies", AccountKind::Supplier, "sales@fabrikam.example", "7812345678")),
        (SUPPLIER_LITWARE.0, account("S-002", "Litware Hardware", AccountKind::Supplier, "", "")),
    ])
}

pub fn invoices() -> RecordList<Invoice> {
    let invoice = |code: &str, account_id: AccountId, issue: &str, due: &str, cents: i64, status: InvoiceStatus| InvoiceDto {
        code: code.into(),
        description: format!("Счёт {}", code),
        account_id: Some(account_id),
        issue_date: issue.into(),
        due_date: due.into(),
        amount: money(cents),
        status,
        comment: None,
    };
    seed(vec![
        (BASE_ID + 201, invoice("INV-1001", CUSTOMER_NORTHWIND, "2024-01-05", "2024-02-04", 1_250_000, InvoiceStatus::Paid)),
        (BASE_ID + 202, invoice("INV-1002", CUSTOMER_NORTHWIND, "2024-02-10", "2024-03-11", 480_050, InvoiceStatus::Sent)),
        (BASE_ID + 203, invoice("INV-1003", CUSTOMER_CONTOSO, "2024-02-20", "2024-03-21", 99_900, InvoiceStatus::Draft)),
    ])
}

pub fn projects() -> RecordList<Project> {
    seed(vec![
        (
            PROJECT_PORTAL.0,
            ProjectDto {
                code: "PRJ-01".into(),
                description: "Клиентский портал".into(),
                account_id: Some(CUSTOMER_NORTHWIND),
                status: ProjectStatus::Active,
                start_date: "2024-01-15".into(),
                end_date: String::new(),
                budget: money(4_000_000),
                hourly_rate: money(8_500),
                comment: None,
            },
        ),
        (
            PROJECT_AUDIT.0,
            ProjectDto {
                code: "PRJ-02".into(),
                description: "Аудит инфраструктуры".into(),
                account_id: Some(CUSTOMER_CONTOSO),
                status: ProjectStatus::Planning,
                start_date: "2024-03-01".into(),
                end_date: "2024-04-30".into(),
                budget: money(1_200_000),
                hourly_rate: money(11_000),
                comment: Some("Ждём подписания договора".into()),
            },
        ),
    ])
}

pub fn time_entries() -> RecordList<TimeEntry> {
    let entry = |project_id: ProjectId, date: &str, hours: i64, text: &str, billable: bool| TimeEntryDto {
        project_id: Some(project_id),
        date: date.into(),
        hours: Decimal::new(hours, 1),
        description: text.into(),
        billable,
    };
    seed(vec![
        (BASE_ID + 401, entry(PROJECT_PORTAL, "2024-01-16", 65, "Проектирование API", true)),
        (BASE_ID + 402, entry(PROJECT_PORTAL, "2024-01-17", 80, "Вёрстка форм", true)),
        (BASE_ID + 403, entry(PROJECT_PORTAL, "2024-01-18", 15, "Внутренний созвон", false)),
        (BASE_ID + 404, entry(PROJECT_AUDIT, "2024-03-01", 40, "Сбор требований", true)),
    ])
}

pub fn bank_accounts() -> RecordList<BankAccount> {
    let account = |number: &str, name: &str, bank: &str, currency: &str, cents: i64, active: bool| BankAccountDto {
        code: number.into(),
        description: name.into(),
        bank_name: bank.into(),
        currency: currency.into(),
        balance: money(cents),
        is_active: active,
        comment: None,
    };
    seed(vec![
        (BANK_OPERATING.0, account("40702810000000001", "Расчётный", "First National Bank", "USD", 5_432_100, true)),
        (BANK_SAVINGS.0, account("40702978000000002", "Валютный", "Harbor Savings", "EUR", 1_200_000, true)),
        (BASE_ID + 503, account("40702810000000003", "Старый счёт", "Closed Bank", "USD", 0, false)),
    ])
}

pub fn bank_transactions() -> RecordList<BankTransaction> {
    let tx = |account: BankAccountId, date: &str, cents: i64, direction: Direction, text: &str, reconciled: bool| BankTransactionDto {
        code: String::new(),
        description: text.into(),
        bank_account_id: Some(account),
        date: date.into(),
        amount: money(cents),
        direction,
        reconciled,
        comment: None,
    };
    seed(vec![
        (BASE_ID + 601, tx(BANK_OPERATING, "2024-02-04", 1_250_000, Direction::Credit, "Оплата INV-1001", true)),
        (BASE_ID + 602, tx(BANK_OPERATING, "2024-02-05", 230_000, Direction::Debit, "Аренда офиса", true)),
        (BASE_ID + 603, tx(BANK_SAVINGS, "2024-02-28", 1_500, Direction::Credit, "Проценты на остаток", false)),
    ])
}

pub fn purchase_orders() -> RecordList<PurchaseOrder> {
    let line = |product: &str, qty: i64, price_cents: i64, tax: i64| PurchaseOrderLine {
        product: product.into(),
        quantity: Decimal::from(qty),
        unit_price: money(price_cents),
        tax_rate: Decimal::from(tax),
    };
    seed(vec![
        (
            BASE_ID + 701,
            PurchaseOrderDto {
                code: "PO-2024-001".into(),
                description: "Оборудование для офиса".into(),
                supplier_id: Some(SUPPLIER_FABRIKAM),
                order_date: "2024-02-01".into(),
                expected_date: "2024-02-15".into(),
                status: PurchaseOrderStatus::Sent,
                lines: vec![line("Монитор 27\"", 4, 32_000, 16), line("Док-станция", 4, 14_950, 16)],
                comment: None,
            },
        ),
        (
            BASE_ID + 702,
            PurchaseOrderDto {
                code: "PO-2024-002".into(),
                description: "Расходные материалы".into(),
                supplier_id: Some(SUPPLIER_LITWARE),
                order_date: "2024-02-20".into(),
                expected_date: String::new(),
                status: PurchaseOrderStatus::Draft,
                lines: vec![line("Бумага A4", 20, 650, 0)],
                comment: None,
            },
        ),
    ])
}

pub fn sales_orders() -> RecordList<SalesOrder> {
    let line = |product: &str, qty: i64, price_cents: i64, discount: i64, tax: i64| SalesOrderLine {
        product: product.into(),
        quantity: Decimal::from(qty),
        unit_price: money(price_cents),
        discount_percentage: Decimal::from(discount),
        tax_rate: Decimal::from(tax),
    };
    seed(vec![
        (
            BASE_ID + 801,
            SalesOrderDto {
                code: "SO-2024-001".into(),
                description: "Лицензии и внедрение".into(),
                customer_id: Some(CUSTOMER_NORTHWIND),
                order_date: "2024-01-20".into(),
                status: SalesOrderStatus::Confirmed,
                lines: vec![
                    line("Лицензия, 1 год", 10, 10_000, 10, 16),
                    line("Внедрение", 1, 250_000, 0, 16),
                ],
                comment: None,
            },
        ),
        (
            BASE_ID + 802,
            SalesOrderDto {
                code: "SO-2024-002".into(),
                description: "Поддержка".into(),
                customer_id: Some(CUSTOMER_CONTOSO),
                order_date: "2024-02-12".into(),
                status: SalesOrderStatus::Draft,
                lines: vec![line("Абонентская поддержка", 3, 45_000, 5, 16)],
                comment: None,
            },
        ),
    ])
}

pub fn roles() -> RecordList<Role> {
    seed(vec![
        (
            ROLE_ADMIN.0,
            RoleDto {
                name: "Администратор".into(),
                description: "Полный доступ".into(),
                permissions: Permission::all().to_vec(),
            },
        ),
        (
            ROLE_ACCOUNTANT.0,
            RoleDto {
                name: "Бухгалтер".into(),
                description: String::new(),
                permissions: vec![
                    Permission::ViewAccounting,
                    Permission::ManageAccounting,
                    Permission::ViewBanking,
                    Permission::ManageBanking,
                ],
            },
        ),
        (
            BASE_ID + 903,
            RoleDto {
                name: "Наблюдатель".into(),
                description: "Только просмотр".into(),
                permissions: vec![Permission::ViewAccounting, Permission::ViewProjects],
            },
        ),
    ])
}

pub fn users() -> RecordList<User> {
    let user = |username: &str, full_name: &str, role: Option<RoleId>, active: bool| UserDto {
        username: username.into(),
        email: format!("{}@company.example", username),
        full_name: full_name.into(),
        role_id: role,
        is_active: active,
    };
    seed(vec![
        (BASE_ID + 1001, user("admin", "Администратор системы", Some(ROLE_ADMIN), true)),
        (BASE_ID + 1002, user("ivanova", "Анна Иванова", Some(ROLE_ACCOUNTANT), true)),
        (BASE_ID + 1003, user("petrov", "Пётр Петров", Some(ROLE_ACCOUNTANT), false)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Record;
    use rust_decimal_macros::dec;

    fn all_valid<T: FormRecord>(list: &RecordList<T>) -> bool {
        list.iter().all(|r| r.validate().is_ok())
    }

    #[test]
    fn test_every_mock_record_is_loaded_and_valid() {
        assert_eq!(accounts().len(), 4);
        assert_eq!(invoices().len(), 3);
        assert_eq!(projects().len(), 2);
        assert_eq!(time_entries().len(), 4);
        assert_eq!(bank_accounts().len(), 3);
        assert_eq!(bank_transactions().len(), 3);
        assert_eq!(purchase_orders().len(), 2);
        assert_eq!(sales_orders().len(), 2);
        assert_eq!(roles().len(), 3);
        assert_eq!(users().len(), 3);

        assert!(all_valid(&accounts()));
        assert!(all_valid(&invoices()));
        assert!(all_valid(&projects()));
        assert!(all_valid(&time_entries()));
        assert!(all_valid(&bank_accounts()));
        assert!(all_valid(&bank_transactions()));
        assert!(all_valid(&purchase_orders()));
        assert!(all_valid(&sales_orders()));
        assert!(all_valid(&roles()));
        assert!(all_valid(&users()));
    }

    #[test]
    fn test_references_point_to_mock_records() {
        let accounts = accounts();
        assert!(invoices().iter().all(|i| accounts.contains(i.account_id)));
        assert!(purchase_orders().iter().all(|o| accounts.contains(o.supplier_id)));
        assert!(sales_orders().iter().all(|o| accounts.contains(o.customer_id)));

        let projects = projects();
        assert!(time_entries().iter().all(|e| projects.contains(e.project_id)));

        let banks = bank_accounts();
        assert!(bank_transactions().iter().all(|t| banks.contains(t.bank_account_id)));

        let roles = roles();
        assert!(users().iter().filter_map(|u| u.role_id).all(|r| roles.contains(r)));
    }

    #[test]
    fn test_new_ids_do_not_collide_with_mock_ids() {
        let mut users = users();
        let max = users.iter().map(|u| u.record_id().0).max().unwrap();
        let id = users.next_id(BASE_ID);
        assert!(id.0 > max);
    }

    #[test]
    fn test_order_totals_are_stored_rounded() {
        let orders = sales_orders();
        let first = orders.get(contracts::domain::a008_sales_order::aggregate::SalesOrderId(BASE_ID + 801)).unwrap();
        // 10 × 100 − 10% = 900, налог 144; 2500 + 400
        assert_eq!(first.totals.subtotal, dec!(3500.00));
        assert_eq!(first.totals.discount, dec!(100.00));
        assert_eq!(first.totals.tax, dec!(544.00));
        assert_eq!(first.totals.total, dec!(3944.00));
    }
}
