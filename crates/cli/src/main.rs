use clap::Parser;
use rootwalk_dns_application::ResolveDomainUseCase;
use rootwalk_dns_domain::config::CliOverrides;
use rootwalk_dns_domain::{DnsQuery, DomainName, Question, RecordType};
use rootwalk_dns_infrastructure::{RandomIdSource, UdpTransport};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "rootwalk-dns")]
#[command(version)]
#[command(about = "Iterative DNS resolver walking referrals from the root servers")]
struct Cli {
    /// Domain name to resolve
    domain: String,

    /// Record type to query (A, AAAA, CNAME, MX, TXT, NS, SOA, PTR)
    #[arg(default_value = "A")]
    record_type: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Query this server instead of the root hints (plain IP)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Per-attempt timeout in seconds
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        server: cli.server.clone(),
        query_timeout: cli.timeout,
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let record_type = RecordType::from_str(&cli.record_type)
        .map_err(|e| anyhow::anyhow!("{} (supported: A, NS, CNAME, SOA, PTR, MX, TXT, AAAA)", e))?;

    let name: DomainName = cli
        .domain
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid domain '{}': {}", cli.domain, e))?;
    let question = Question::new(name, record_type);
    println!("Query: {}", to_hex(&question.encode()));

    info!(
        domain = %cli.domain,
        record_type = %record_type,
        root_hint = %config.resolver.first_root_server()?,
        "starting resolution"
    );

    let use_case = ResolveDomainUseCase::new(
        Arc::new(UdpTransport::new()),
        Arc::new(RandomIdSource::new()),
        config.resolver.clone(),
    );

    let query = DnsQuery::new(cli.domain.as_str(), record_type);
    let resolution = use_case.execute(&query).await?;

    println!(
        "Answer ({} record(s) from {} after {} hop(s)):",
        resolution.records.len(),
        resolution.server,
        resolution.hops
    );
    for record in &resolution.records {
        println!("  {}", record);
    }

    Ok(())
}
