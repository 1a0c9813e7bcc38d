//! A complete worked example of a shortlist-based account search CLI.
//!
//! This binary plays the caller role that a UI layer would normally
//! play: it collects raw input, validates it, hands the engine a query
//! snapshot, and renders the ordered results (or the "did you mean"
//! suggestions when nothing matched).
//!
//! ```text
//! accts --company acme --filter "balance:>:100" --sort balance
//! accts --company "Acme Crop"          # misspelled: prints suggestions
//! accts --status open --status closed --added-from 2024-01-01
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use shortlist::{
    evaluate_query, validate_date_bound, validate_search_input, Account, AccountField,
    AccountStatus, DateBound, FilterCondition, FilterOp, Logic, QueryOutcome, SimpleSearch,
};

const SAMPLE_ACCOUNTS: &str = include_str!("sample_accounts.json");

#[derive(Parser)]
#[command(name = "accts", about = "Search, filter, and sort an account list")]
struct Cli {
    /// JSON file with an array of accounts (bundled sample when omitted).
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Account-number search term.
    #[arg(long, value_name = "TERM")]
    account_number: Option<String>,

    /// Company-name search term.
    #[arg(long, value_name = "TERM")]
    company: Option<String>,

    /// Contact-name search term.
    #[arg(long, value_name = "TERM")]
    contact: Option<String>,

    /// Phone-number search term.
    #[arg(long, value_name = "TERM")]
    phone: Option<String>,

    /// Email search term.
    #[arg(long, value_name = "TERM")]
    email: Option<String>,

    /// Match search terms exactly as typed instead of case-insensitively.
    #[arg(long)]
    case_sensitive: bool,

    /// Keep only accounts with this status (repeatable).
    #[arg(long = "status", value_name = "STATUS")]
    statuses: Vec<String>,

    /// Advanced filter `[and|or:]FIELD:OP:VALUE[,VALUE...]` (repeatable).
    ///
    /// Conditions chain strictly left to right. Example:
    /// `--filter "balance:>:1000" --filter "or:companyName:contains:acme,zenith"`
    #[arg(long = "filter", value_name = "SPEC")]
    filters: Vec<String>,

    /// Keep only accounts added on or after this date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    added_from: Option<String>,

    /// Keep only accounts added on or before this date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    added_to: Option<String>,

    /// Reference date for validating the date bounds (YYYY-MM-DD).
    /// Bounds are accepted as-is when omitted.
    #[arg(long, value_name = "DATE")]
    today: Option<String>,

    /// Sort results by this field; direction is fixed per field.
    #[arg(long, value_name = "FIELD")]
    sort: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let accounts = load_accounts(&cli)?;
    let search = build_search(&cli)?;
    let filters = build_filters(&cli)?;
    let sort = cli
        .sort
        .as_deref()
        .map(|name| {
            AccountField::parse(name).ok_or_else(|| anyhow!("unknown sort field {name:?}"))
        })
        .transpose()?;

    let outcome = evaluate_query(&accounts, &search, &filters, sort);
    render(&outcome);
    Ok(())
}

fn load_accounts(cli: &Cli) -> Result<Vec<Account>> {
    match &cli.data {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        None => serde_json::from_str(SAMPLE_ACCOUNTS).context("parsing bundled sample data"),
    }
}

fn build_search(cli: &Cli) -> Result<SimpleSearch> {
    let terms = [
        (AccountField::AccountNumber, &cli.account_number),
        (AccountField::CompanyName, &cli.company),
        (AccountField::ContactName, &cli.contact),
        (AccountField::PhoneNumber, &cli.phone),
        (AccountField::Email, &cli.email),
    ];

    let mut search = SimpleSearch::new();
    for (field, term) in terms {
        if let Some(term) = term {
            validate_search_input(field, term)
                .map_err(|err| anyhow!("{field}: {err}"))?;
            search = search
                .term(field, term.clone())
                .case_sensitive(field, cli.case_sensitive);
        }
    }
    for raw in &cli.statuses {
        let status = AccountStatus::parse(raw)
            .ok_or_else(|| anyhow!("unknown status {raw:?}"))?;
        search = search.status(status);
    }
    Ok(search)
}

fn build_filters(cli: &Cli) -> Result<Vec<FilterCondition>> {
    let mut filters = Vec::new();
    for spec in &cli.filters {
        filters.push(parse_filter(spec)?);
    }

    if cli.added_from.is_some() || cli.added_to.is_some() {
        if let Some(today) = cli.today.as_deref() {
            if let Some(from) = cli.added_from.as_deref() {
                validate_date_bound(DateBound::Start, from, cli.added_to.as_deref(), today)
                    .map_err(|err| anyhow!("--added-from: {err}"))?;
            }
            if let Some(to) = cli.added_to.as_deref() {
                validate_date_bound(DateBound::End, to, cli.added_from.as_deref(), today)
                    .map_err(|err| anyhow!("--added-to: {err}"))?;
            }
        }
        filters.push(FilterCondition::date_range(
            AccountField::DateAdded,
            cli.added_from.clone(),
            cli.added_to.clone(),
        ));
    }
    Ok(filters)
}

fn parse_filter(spec: &str) -> Result<FilterCondition> {
    let (logic, rest) = match spec.split_once(':') {
        Some((head, rest)) if head.eq_ignore_ascii_case("and") => (Logic::And, rest),
        Some((head, rest)) if head.eq_ignore_ascii_case("or") => (Logic::Or, rest),
        _ => (Logic::And, spec),
    };

    let mut parts = rest.splitn(3, ':');
    let field = parts
        .next()
        .and_then(AccountField::parse)
        .ok_or_else(|| anyhow!("bad filter {spec:?}: unknown field"))?;
    let op = parts
        .next()
        .and_then(FilterOp::parse)
        .ok_or_else(|| anyhow!("bad filter {spec:?}: unknown operator"))?;
    let values = parts
        .next()
        .ok_or_else(|| anyhow!("bad filter {spec:?}: expected FIELD:OP:VALUE"))?;

    let mut condition = FilterCondition::new(field, op).with_logic(logic);
    for value in values.split(',').filter(|v| !v.is_empty()) {
        condition = condition.value(value);
    }
    if condition.is_inert() {
        bail!("bad filter {spec:?}: no operand values");
    }
    Ok(condition)
}

fn render(outcome: &QueryOutcome<'_>) {
    if outcome.results.is_empty() {
        println!("No accounts matched.");
    } else {
        println!("{} account(s):", outcome.results.len());
        for account in &outcome.results {
            println!(
                "  {:<8} {:<20} {:<14} {:<12} {:>8}  {}",
                account.account_number,
                account.company_name,
                account.contact_name,
                account.status,
                account.balance,
                account.date_added,
            );
        }
    }

    if let Some(suggestions) = &outcome.suggestions {
        for (field, candidates) in suggestions {
            if candidates.is_empty() {
                continue;
            }
            let values: Vec<String> = candidates
                .iter()
                .map(|account| account.field_text(*field).into_owned())
                .collect();
            println!("Did you mean ({field}): {}", values.join(", "));
        }
    }
}
