use crate::ports::{DnsTransport, TransactionIdSource};
use rootwalk_dns_domain::config::ResolverConfig;
use rootwalk_dns_domain::{
    DnsQuery, DomainError, DomainName, Message, Question, RecordData, RecordType, ResourceRecord,
};
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of a successful walk: the answer records plus where and how
/// far down the delegation chain they came from.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub records: Vec<ResourceRecord>,
    pub server: SocketAddr,
    pub hops: u8,
}

/// Iterative resolution from the root hints down to an authoritative server.
///
/// One query message is built per run and its bytes (and transaction id)
/// are reused across every referral hop, so any hop's reply correlates
/// with the original request.
pub struct ResolveDomainUseCase {
    transport: Arc<dyn DnsTransport>,
    ids: Arc<dyn TransactionIdSource>,
    config: ResolverConfig,
}

impl ResolveDomainUseCase {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        ids: Arc<dyn TransactionIdSource>,
        config: ResolverConfig,
    ) -> Self {
        Self {
            transport,
            ids,
            config,
        }
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<Resolution, DomainError> {
        let name = query.name()?;
        let mut budget = self.config.max_referrals;
        self.walk(name, query.record_type, &mut budget).await
    }

    /// Walk the referral chain for one name.
    ///
    /// `budget` is shared with any nested walk (glueless referrals), so a
    /// delegation cycle cannot exceed `max_referrals` queries in total.
    /// Boxed because resolving a glueless name server recurses.
    fn walk<'a>(
        &'a self,
        name: DomainName,
        record_type: RecordType,
        budget: &'a mut u8,
    ) -> Pin<Box<dyn Future<Output = Result<Resolution, DomainError>> + Send + 'a>> {
        Box::pin(async move {
            let domain = name.to_string();
            let question = Question::new(name, record_type);
            let id = self.ids.next_id();
            let query_bytes = Message::build_query(id, &question);

            let mut server = self
                .config
                .first_root_server()
                .map_err(|e| DomainError::Config(e.to_string()))?;
            let mut hops = 0u8;

            loop {
                if *budget == 0 {
                    return Err(DomainError::ReferralLoop {
                        hops: self.config.max_referrals,
                    });
                }
                *budget -= 1;
                hops += 1;

                debug!(%server, %domain, hop = hops, "querying name server");
                let response = self.exchange(server, &query_bytes).await?;

                // Correlation check runs on the raw bytes, before parsing:
                // it is the sole defense against spoofed or stale replies.
                if !Message::matches_transaction(id, &response) {
                    warn!(%server, "discarding response with mismatched transaction id");
                    return Err(DomainError::SpoofedResponse {
                        server: server.to_string(),
                    });
                }

                let message = Message::parse(&response)?;
                if message.header.is_truncated() {
                    warn!(%server, "response has TC set; sections may be incomplete");
                }
                debug!(
                    %server,
                    answers = message.answers.len(),
                    authorities = message.authorities.len(),
                    additionals = message.additionals.len(),
                    "response parsed"
                );

                if !message.answers.is_empty() {
                    return Ok(Resolution {
                        records: message.answers,
                        server,
                        hops,
                    });
                }

                if message.authorities.is_empty() {
                    return Err(DomainError::NoAnswerOrDelegation {
                        server: server.to_string(),
                    });
                }

                server = self.next_server(server, &message, budget).await?;
            }
        })
    }

    /// Send the query with bounded retries and exponential backoff.
    /// Only transport failures and timeouts are retried.
    async fn exchange(
        &self,
        server: SocketAddr,
        payload: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        let timeout = self.config.query_timeout();
        let mut delay = self.config.retry_backoff();
        let mut last_err = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            match self.transport.send(server, payload, timeout).await {
                Ok(bytes) => return Ok(bytes),
                Err(e @ (DomainError::Transport { .. } | DomainError::QueryTimeout { .. })) => {
                    warn!(%server, attempt, error = %e, "exchange attempt failed");
                    last_err = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err.unwrap_or(DomainError::Transport {
            server: server.to_string(),
            reason: "no attempts made".to_string(),
        }))
    }

    /// Pick the next server from a referral: a glue address record in the
    /// additional section whose owner name matches one of the authority
    /// section's NS targets. With no glue, the name server's own name is
    /// resolved through a nested walk sharing the caller's hop budget.
    async fn next_server(
        &self,
        current: SocketAddr,
        message: &Message,
        budget: &mut u8,
    ) -> Result<SocketAddr, DomainError> {
        let ns_targets: Vec<&DomainName> = message
            .authorities
            .iter()
            .filter_map(|rr| match &rr.data {
                RecordData::Ns(name) => Some(name),
                _ => None,
            })
            .collect();

        if ns_targets.is_empty() {
            return Err(DomainError::NoAnswerOrDelegation {
                server: current.to_string(),
            });
        }

        // IPv4 glue first, IPv6 second.
        for rr in &message.additionals {
            if let RecordData::A(addr) = rr.data {
                if ns_targets.iter().any(|target| **target == rr.name) {
                    return Ok(SocketAddr::new(addr.into(), current.port()));
                }
            }
        }
        for rr in &message.additionals {
            if let RecordData::Aaaa(addr) = rr.data {
                if ns_targets.iter().any(|target| **target == rr.name) {
                    return Ok(SocketAddr::new(addr.into(), current.port()));
                }
            }
        }

        let name_server = ns_targets[0].to_string();
        debug!(%current, %name_server, "referral without glue; resolving name server address");
        let nested = self.walk(ns_targets[0].clone(), RecordType::A, budget).await?;
        nested
            .records
            .iter()
            .find_map(|rr| match rr.data {
                RecordData::A(addr) => Some(SocketAddr::new(addr.into(), current.port())),
                RecordData::Aaaa(addr) => Some(SocketAddr::new(addr.into(), current.port())),
                _ => None,
            })
            .ok_or(DomainError::MissingGlue {
                server: current.to_string(),
                name_server,
            })
    }
}
