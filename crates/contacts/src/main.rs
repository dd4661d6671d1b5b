//! contacts - File-backed contact list
//!
//! Keeps a small list of people (name, lastname, phone, birth date) in a
//! single JSON file. Every load is gated by schema validation; the file is
//! written back only after a mutating command.
//!
//! Commands:
//! - add <file>: Append a new contact and save the list
//! - display <file>: Print the list as a table
//! - select <file>: Look up a contact by phone number

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use contacts::record::{ContactList, Record};
use contacts::schema::SchemaValidator;
use contacts::store::{ContactStore, StoreError};
use contacts::table::render_table;

#[derive(Parser)]
#[command(name = "contacts")]
#[command(about = "File-backed contact list - add, display, and look up people by phone")]
#[command(version)]
#[command(after_help = "\
EXAMPLES:
    contacts add book.json --create -n Ann -l Lee -p 111 -b 2000-01-01
    contacts display book.json
    contacts select book.json --phone 111

FILES:
    The contact list lives in the JSON file named on the command line.
    Records are validated against schema.json in the working directory;
    a file with any nonconforming record is refused wholesale.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new contact and save the list
    Add {
        /// Path to the contact list file
        filename: PathBuf,

        /// The person's name
        #[arg(short, long)]
        name: String,

        /// The person's lastname
        #[arg(short, long)]
        lastname: String,

        /// The person's phone numbers
        #[arg(short, long)]
        phone: String,

        /// The person's birth date (free-form text)
        #[arg(short, long)]
        birthdate: String,

        /// Start an empty list if the file does not exist
        #[arg(long)]
        create: bool,
    },

    /// Display the contact list as a table
    Display {
        /// Path to the contact list file
        filename: PathBuf,
    },

    /// Look up a contact by phone number
    Select {
        /// Path to the contact list file
        filename: PathBuf,

        /// The phone number to look for (exact match)
        #[arg(short, long)]
        phone: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let validator = SchemaValidator::open_default()?;

    match cli.command {
        Commands::Add {
            filename,
            name,
            lastname,
            phone,
            birthdate,
            create,
        } => cmd_add(
            &validator, &filename, &name, &lastname, &phone, &birthdate, create,
        ),
        Commands::Display { filename } => cmd_display(&validator, &filename),
        Commands::Select { filename, phone } => cmd_select(&validator, &filename, &phone),
    }
}

/// Append a new contact and save the list
fn cmd_add(
    validator: &SchemaValidator,
    filename: &Path,
    name: &str,
    lastname: &str,
    phone: &str,
    birthdate: &str,
    create: bool,
) -> Result<()> {
    let store = ContactStore::new(filename);

    let mut list = if store.exists() {
        store.load(validator)?
    } else if create {
        ContactList::new()
    } else {
        bail!(StoreError::NotFound(filename.to_path_buf()));
    };

    let record = Record::new(name, lastname, phone, birthdate);

    // Reject a nonconforming record here rather than on the next load
    validator.validate_record(&record)?;

    list.add(record);
    store.save(&list)?;

    println!("success: Added {} {}", name, lastname);
    println!(
        "info: Saved {} contact(s) to {}",
        list.len(),
        filename.display()
    );

    Ok(())
}

/// Print the contact list as a table
fn cmd_display(validator: &SchemaValidator, filename: &Path) -> Result<()> {
    let store = ContactStore::new(filename);
    let list = store.load(validator)?;

    println!("{}", render_table(list.records()));

    Ok(())
}

/// Look up a contact by phone number
fn cmd_select(validator: &SchemaValidator, filename: &Path, phone: &str) -> Result<()> {
    let store = ContactStore::new(filename);
    let list = store.load(validator)?;

    match list.select(phone) {
        Some(record) => {
            let rendered = serde_json::to_string_pretty(record)
                .context("Failed to render selected contact")?;
            println!("{}", rendered);
        }
        None => println!("No contact with phone number {}", phone),
    }

    Ok(())
}
