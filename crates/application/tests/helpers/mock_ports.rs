#![allow(dead_code)]

use async_trait::async_trait;
use nodeip_application::ports::{HostResolver, NodeDirectory, TableRenderer};
use nodeip_domain::{DomainError, Node, ResolutionFailure, ResolutionResult};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct MockNodeDirectory {
    nodes: Vec<Node>,
    error: Option<String>,
    fetch_count: AtomicUsize,
}

impl MockNodeDirectory {
    pub fn with_hostnames(hostnames: &[&str]) -> Self {
        Self {
            nodes: hostnames.iter().map(|h| Node::new(h).unwrap()).collect(),
            error: None,
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            nodes: Vec::new(),
            error: Some(message.to_string()),
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NodeDirectory for MockNodeDirectory {
    async fn fetch_nodes(&self) -> Result<Vec<Node>, DomainError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(message) => Err(DomainError::DirectoryUnavailable(message.clone())),
            None => Ok(self.nodes.clone()),
        }
    }
}

/// Answers from a fixed table; hostnames not in the table are `NotFound`.
pub struct MockHostResolver {
    answers: HashMap<String, Result<IpAddr, ResolutionFailure>>,
    calls: Mutex<Vec<String>>,
}

impl MockHostResolver {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_address(mut self, hostname: &str, address: &str) -> Self {
        self.answers
            .insert(hostname.to_string(), Ok(address.parse().unwrap()));
        self
    }

    pub fn with_failure(mut self, hostname: &str, failure: ResolutionFailure) -> Self {
        self.answers.insert(hostname.to_string(), Err(failure));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockHostResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for MockHostResolver {
    async fn resolve(&self, node: Node) -> ResolutionResult {
        self.calls.lock().unwrap().push(node.hostname().to_string());
        match self.answers.get(node.hostname()) {
            Some(Ok(addr)) => ResolutionResult::resolved(node, *addr),
            Some(Err(failure)) => ResolutionResult::failed(node, failure.clone()),
            None => ResolutionResult::failed(node, ResolutionFailure::NotFound),
        }
    }
}

/// Renders `a|b` lines so report layout can be asserted without box drawing.
pub struct PipeTableRenderer;

impl TableRenderer for PipeTableRenderer {
    fn render(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut lines = vec![headers.join("|")];
        lines.extend(rows.iter().map(|row| row.join("|")));
        lines.join("\n")
    }
}
