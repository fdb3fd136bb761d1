mod config;
mod db;
mod error;
mod models;
mod operations;
mod session;
mod validation;

use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::db::store::TransactionStore;
use crate::error::Error;
use crate::models::transaction::{Transaction, TransactionKind};
use crate::operations::add::add_transaction;
use crate::operations::remove::remove_transaction;
use crate::operations::reset::reset_all_tables;
use crate::operations::total::total_amount;
use crate::operations::update::update_transaction;
use crate::operations::view::view_transactions;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "wallet-watch", about = "Console income and expense tracker")]
struct Cli {
    /// Path of the SQLite database file (overrides WALLET_DB).
    #[arg(long)]
    database: Option<String>,

    /// Log in as this user id instead of prompting.
    #[arg(long)]
    user: Option<i64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = Config::load();
    if let Some(database) = cli.database {
        config.db_path = database;
    }

    println!("Welcome to Wallet-Watch!");
    let conn = match db::connection::establish_connection(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Error: Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    let session = authenticate(cli.user, config.admin_id);
    let incomes = TransactionStore::new(&conn, TransactionKind::Income);
    let expenses = TransactionStore::new(&conn, TransactionKind::Expense);

    run_main_loop(&session, &incomes, &expenses);
}

fn run_main_loop(
    session: &Session,
    incomes: &TransactionStore<'_>,
    expenses: &TransactionStore<'_>,
) {
    loop {
        display_menu(session.is_admin());
        let choice = match prompt("Enter your choice: ").parse::<u32>() {
            Ok(choice) => choice,
            Err(_) => {
                println!("Error: Invalid input: Please enter a number");
                continue;
            }
        };

        match choice {
            1 => add_flow(incomes, session),
            2 => view_flow(incomes, session),
            3 => add_flow(expenses, session),
            4 => view_flow(expenses, session),
            5 => balance_flow(incomes, expenses, session),
            6 => {
                println!("Success: Exiting... Goodbye!");
                return;
            }
            7 if session.is_admin() => update_flow(incomes, session),
            8 if session.is_admin() => remove_flow(incomes, session),
            9 if session.is_admin() => update_flow(expenses, session),
            10 if session.is_admin() => remove_flow(expenses, session),
            11 if session.is_admin() => view_all_users_flow(),
            12 if session.is_admin() => reset_flow(incomes, expenses, session),
            7..=12 => println!("Error: Admin access required"),
            _ => println!("Error: Invalid option. Please try again."),
        }
    }
}

fn display_menu(is_admin: bool) {
    let base_options = [
        "Add Income",
        "View Income",
        "Add Expense",
        "View Expenses",
        "Show Balance",
        "Exit",
    ];
    let admin_options = [
        "Update Income",
        "Delete Income",
        "Update Expense",
        "Delete Expense",
        "View All Users",
        "Reset All Tables",
    ];

    println!("\n=== Wallet-Watch Menu ===");
    let options: Vec<&str> = if is_admin {
        base_options.iter().chain(admin_options.iter()).copied().collect()
    } else {
        base_options.to_vec()
    };
    for (i, option) in options.iter().enumerate() {
        println!("{}. {}", i + 1, option);
    }
}

/// Prompts for a user id until a positive one is given. The reserved admin
/// id grants administrator access.
fn authenticate(preset_user: Option<i64>, admin_id: i64) -> Session {
    if let Some(user_id) = preset_user
        && user_id > 0
    {
        let session = Session::new(user_id, admin_id);
        announce_access(&session);
        return session;
    }

    loop {
        match prompt("Enter User ID: ").parse::<i64>() {
            Ok(user_id) if user_id > 0 => {
                let session = Session::new(user_id, admin_id);
                announce_access(&session);
                return session;
            }
            Ok(_) => println!("Error: Invalid User ID. Please enter a positive number."),
            Err(_) => println!("Error: Invalid input. Please enter a valid User ID."),
        }
    }
}

fn announce_access(session: &Session) {
    if session.is_admin() {
        println!("Success: Administrator access granted.");
    } else {
        println!("Success: User access granted.");
    }
}

fn add_flow(store: &TransactionStore<'_>, session: &Session) {
    let noun = store.kind().noun();
    loop {
        let amount = prompt("Enter Amount: ");
        let label = prompt(&format!("Enter {}: ", store.kind().label_field()));
        let date = prompt("Enter Date (YYYYMMDD): ");

        match add_transaction(store, session, &amount, &label, &date) {
            Ok(_) => {
                println!("Success: {} added successfully!", noun);
                return;
            }
            Err(Error::Validation(e)) => println!("Error: {}\nPlease try again.", e),
            Err(e) => {
                println!("Error: {}", e);
                return;
            }
        }
    }
}

fn view_flow(store: &TransactionStore<'_>, session: &Session) {
    let target = if session.is_admin() {
        match prompt("Enter User ID to view (or 0 for all users): ").parse::<i64>() {
            Ok(target) => target,
            Err(_) => {
                println!("Error: Invalid input: Please enter a number");
                return;
            }
        }
    } else {
        session.user_id()
    };

    match view_transactions(store, session, target) {
        Ok(records) => display_records(store.kind(), &records, target),
        Err(e) => println!("Error: {}", e),
    }
}

fn display_records(kind: TransactionKind, records: &[Transaction], target: i64) {
    let scope = if target != 0 {
        format!(" for User ID: {}", target)
    } else {
        String::new()
    };

    if records.is_empty() {
        println!("No {} records found{}", kind.noun().to_lowercase(), scope);
    } else {
        println!("\n{} Records{}", kind.noun(), scope);
        for record in records {
            println!("{}", record);
        }
    }
}

fn update_flow(store: &TransactionStore<'_>, session: &Session) {
    let noun = store.kind().noun();
    loop {
        let Some(user_id) = prompt_id("Enter User ID: ") else {
            return;
        };
        let Some(id) = prompt_id(&format!("Enter {} ID to update: ", noun)) else {
            return;
        };
        let amount = prompt("Enter new Amount: ");
        let label = prompt(&format!("Enter new {}: ", store.kind().label_field()));
        let date = prompt("Enter new Date (YYYYMMDD): ");

        match update_transaction(store, session, id, user_id, &amount, &label, &date) {
            Ok(true) => {
                println!("Success: {} updated successfully!", noun);
                return;
            }
            Ok(false) => {
                println!("Error: {} not found.", noun);
                return;
            }
            Err(Error::Validation(e)) => println!("Error: {}\nPlease try again.", e),
            Err(e) => {
                println!("Error: {}", e);
                return;
            }
        }
    }
}

fn remove_flow(store: &TransactionStore<'_>, session: &Session) {
    let noun = store.kind().noun();
    let Some(user_id) = prompt_id("Enter User ID: ") else {
        return;
    };

    match store.get_by_user_id(user_id) {
        Ok(records) if records.is_empty() => {
            println!("No {} records found for User ID: {}", noun.to_lowercase(), user_id);
            return;
        }
        Ok(records) => display_records(store.kind(), &records, user_id),
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    }

    let Some(id) = prompt_id(&format!("Enter {} ID to delete: ", noun)) else {
        return;
    };
    match remove_transaction(store, session, id) {
        Ok(true) => println!("Success: {} deleted successfully!", noun),
        Ok(false) => println!("Error: {} not found.", noun),
        Err(e) => println!("Error: {}", e),
    }
}

fn balance_flow(
    incomes: &TransactionStore<'_>,
    expenses: &TransactionStore<'_>,
    session: &Session,
) {
    let target = if session.is_admin() {
        match prompt("Enter User ID (or 0 for all users): ").parse::<i64>() {
            Ok(target) => target,
            Err(_) => {
                println!("Error: Invalid input: Please enter a number");
                return;
            }
        }
    } else {
        session.user_id()
    };

    match (
        total_amount(incomes, session, target),
        total_amount(expenses, session, target),
    ) {
        (Ok(income_total), Ok(expense_total)) => {
            if session.is_admin() {
                let scope = if target == 0 {
                    String::new()
                } else {
                    format!(" for User {}", target)
                };
                println!("Total Income{}: ${:.2}", scope, income_total.round_dp(2));
                println!("Total Expenses{}: ${:.2}", scope, expense_total.round_dp(2));
            } else {
                println!("Your Total Income: ${:.2}", income_total.round_dp(2));
                println!("Your Total Expenses: ${:.2}", expense_total.round_dp(2));
            }
        }
        (Err(e), _) | (_, Err(e)) => println!("Error: {}", e),
    }
}

fn view_all_users_flow() {
    // Needs a users table; there is none yet.
    println!("View all users functionality coming soon!");
}

fn reset_flow(
    incomes: &TransactionStore<'_>,
    expenses: &TransactionStore<'_>,
    session: &Session,
) {
    let confirm = prompt("Are you sure you want to delete all records? (y/n): ");
    if confirm.to_lowercase() != "y" {
        println!("Operation cancelled.");
        return;
    }

    match reset_all_tables(incomes, expenses, session) {
        Ok(_) => println!("Success: All records deleted successfully!"),
        Err(e) => println!("Error: {}", e),
    }
}

fn prompt(message: &str) -> String {
    print!("{}", message);
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_id(message: &str) -> Option<i64> {
    match prompt(message).parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            println!("Error: Invalid input: Please enter a number");
            None
        }
    }
}
