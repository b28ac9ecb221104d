mod proxy;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tickets::{NewTicket, Ticket, TicketStatus, TicketValidationError, sort_newest_first};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("{0}")]
    Validation(#[from] TicketValidationError),
    #[error("unknown status `{0}`; expected one of open, in_progress, resolved, escalated, closed")]
    UnknownStatus(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "ticketctl", about = "Ticket resolver API client and development proxy")]
struct Cli {
    #[arg(long, env = "TICKETS_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the API is running.
    Ping,
    /// List tickets, newest first.
    List {
        #[arg(long, default_value_t = 0)]
        skip: i64,
        #[arg(long, default_value_t = 100)]
        limit: i64,
        #[arg(long)]
        json: bool,
    },
    /// Submit a ticket for triage.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        json: bool,
    },
    /// Show one ticket.
    Show {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Move a ticket to another status.
    SetStatus { id: i64, status: String },
    /// Serve the web client and forward `/api/*` to the backend.
    Proxy {
        #[arg(long, default_value = "127.0.0.1:5173")]
        listen: SocketAddr,
        #[arg(long, default_value = "http://127.0.0.1:8000")]
        backend: String,
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    let base_url = cli.base_url;

    match cli.command {
        Command::Ping => run_ping(&base_url).await,
        Command::List { skip, limit, json } => run_list(&base_url, skip, limit, json).await,
        Command::Create { title, description, json } => run_create(&base_url, &title, &description, json).await,
        Command::Show { id, json } => run_show(&base_url, id, json).await,
        Command::SetStatus { id, status } => run_set_status(&base_url, id, &status).await,
        Command::Proxy { listen, backend, static_dir } => proxy::run(listen, backend, static_dir).await,
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let json = api_request(base_url, reqwest::Method::GET, "/", None).await?;
    let status = json.get("status").and_then(Value::as_str).unwrap_or("ok");
    println!("{status}");
    Ok(())
}

async fn run_list(base_url: &str, skip: i64, limit: i64, json: bool) -> Result<(), CliError> {
    let path = format!("/tickets?skip={skip}&limit={limit}");
    let value = api_request(base_url, reqwest::Method::GET, &path, None).await?;
    let mut tickets: Vec<Ticket> = serde_json::from_value(value)?;
    sort_newest_first(&mut tickets);

    if json {
        return print_json(&serde_json::to_value(&tickets)?);
    }
    if tickets.is_empty() {
        println!("No tickets submitted yet.");
    }
    for ticket in &tickets {
        println!("{}", format_ticket_line(ticket));
    }
    Ok(())
}

async fn run_create(base_url: &str, title: &str, description: &str, json: bool) -> Result<(), CliError> {
    let new = NewTicket::new(title, description).validate()?;
    let value = api_request(base_url, reqwest::Method::POST, "/tickets", Some(serde_json::to_value(&new)?)).await?;
    print_ticket(value, json)
}

async fn run_show(base_url: &str, id: i64, json: bool) -> Result<(), CliError> {
    let value = api_request(base_url, reqwest::Method::GET, &format!("/tickets/{id}"), None).await?;
    print_ticket(value, json)
}

async fn run_set_status(base_url: &str, id: i64, status: &str) -> Result<(), CliError> {
    let status = TicketStatus::parse(status).ok_or_else(|| CliError::UnknownStatus(status.to_owned()))?;
    let body = serde_json::json!({ "status": status.as_str() });
    let value = api_request(base_url, reqwest::Method::PATCH, &format!("/tickets/{id}"), Some(body)).await?;
    let ticket: Ticket = serde_json::from_value(value)?;
    println!("{}", format_ticket_line(&ticket));
    Ok(())
}

async fn api_request(base_url: &str, method: reqwest::Method, path: &str, body: Option<Value>) -> Result<Value, CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);

    let request = client.request(method, &url);
    let request = if let Some(json) = body { request.json(&json) } else { request };

    let response = request.send().await?;
    let status = response.status();
    let value = response.json::<Value>().await.unwrap_or(Value::Null);

    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: value.to_string() });
    }

    Ok(value)
}

fn print_ticket(value: Value, json: bool) -> Result<(), CliError> {
    if json {
        return print_json(&value);
    }
    let ticket: Ticket = serde_json::from_value(value)?;
    println!("{}", format_ticket_detail(&ticket));
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// One-line summary: `#id [status] priority/category title`.
fn format_ticket_line(ticket: &Ticket) -> String {
    format!(
        "#{} [{}] {}/{} {}",
        ticket.id,
        ticket.status.label(),
        ticket.priority,
        ticket.category,
        ticket.title
    )
}

fn format_ticket_detail(ticket: &Ticket) -> String {
    let mut out = format!(
        "#{} {}\ncategory: {}\npriority: {}\nstatus:   {}\n\n{}\n",
        ticket.id,
        ticket.title,
        ticket.category,
        ticket.priority,
        ticket.status.label(),
        ticket.description
    );
    if let Some(resolution) = &ticket.resolution {
        out.push_str("\nAI Agent Resolution:\n");
        out.push_str(resolution);
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
