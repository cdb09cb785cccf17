use std::{io::Write, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use client_core::{
    load_settings,
    summary::{EMPTY_SUMMARY, SUMMARY_TITLE},
    Clock, FormController, SubmitOutcome,
};
use shared::AddressField;
use storage::AddressPersistence;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shipping-address", about = "Edit the saved shipping address")]
struct Args {
    /// JSON file backing the local key-value store.
    #[arg(long, global = true)]
    storage_path: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the saved address summary.
    Show,
    /// Update fields on top of the saved address, validate, and save.
    Save(FieldArgs),
    /// Remove the saved address.
    Clear,
}

#[derive(ClapArgs, Debug, Default)]
struct FieldArgs {
    #[arg(long)]
    full_name: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    street: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    pincode: Option<String>,
}

impl FieldArgs {
    fn edits(&self) -> impl Iterator<Item = (AddressField, &str)> + '_ {
        [
            (AddressField::FullName, &self.full_name),
            (AddressField::Phone, &self.phone),
            (AddressField::Street, &self.street),
            (AddressField::City, &self.city),
            (AddressField::State, &self.state),
            (AddressField::Pincode, &self.pincode),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|value| (field, value)))
    }
}

fn print_summary<P, C>(out: &mut impl Write, form: &FormController<P, C>) -> Result<()>
where
    P: AddressPersistence,
    C: Clock,
{
    writeln!(out, "{SUMMARY_TITLE}")?;
    match form.summary() {
        Some(summary) => writeln!(out, "{summary}")?,
        None => writeln!(out, "{EMPTY_SUMMARY}")?,
    }
    Ok(())
}

fn run<P, C>(command: Command, form: &mut FormController<P, C>, out: &mut impl Write) -> Result<()>
where
    P: AddressPersistence,
    C: Clock,
{
    match command {
        Command::Show => print_summary(out, form),
        Command::Save(fields) => {
            for (field, value) in fields.edits() {
                form.update_field(field, value);
            }
            let outcome = form.submit();
            match outcome {
                SubmitOutcome::Saved => {
                    if let Some(status) = form.status() {
                        writeln!(out, "{}", status.text())?;
                    }
                    print_summary(out, form)
                }
                SubmitOutcome::Invalid => {
                    for (field, message) in form.errors().iter() {
                        writeln!(out, "{}: {message}", field.label())?;
                    }
                    bail!("address has {} invalid field(s); nothing saved", form.errors().len())
                }
                SubmitOutcome::StorageFailed => {
                    if let Some(status) = form.status() {
                        writeln!(out, "{}", status.text())?;
                    }
                    bail!("storage rejected the address")
                }
            }
        }
        Command::Clear => {
            form.clear();
            if let Some(status) = form.status() {
                writeln!(out, "{}", status.text())?;
            }
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut settings = load_settings();
    if let Some(path) = args.storage_path {
        settings.storage_path = path;
    }
    tracing::debug!(path = %settings.storage_path.display(), "using address storage");

    let mut form =
        FormController::new(settings.address_store()).with_timings(settings.status_timings());
    let stdout = std::io::stdout();
    run(args.command, &mut form, &mut stdout.lock())
        .with_context(|| format!("storage file '{}'", settings.storage_path.display()))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
