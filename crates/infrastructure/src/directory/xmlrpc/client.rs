use super::codec::{decode_response, encode_call, XmlRpcError, XmlRpcValue};
use async_trait::async_trait;
use nodeip_application::ports::NodeDirectory;
use nodeip_domain::{AuthMethod, DirectoryAuth, DirectoryConfig, DomainError, Node};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};

const XML_CONTENT_TYPE: &str = "text/xml";

/// Lists nodes through an XML-RPC `GetNodes`-style call.
pub struct XmlRpcNodeDirectory {
    client: reqwest::Client,
    url: String,
    method: String,
    hostname_field: String,
    auth: XmlRpcValue,
    filter: XmlRpcValue,
    timeout: Duration,
}

impl XmlRpcNodeDirectory {
    pub fn new(config: &DirectoryConfig) -> Result<Self, DomainError> {
        let timeout = Duration::from_secs(config.request_timeout);
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .user_agent(concat!("nodeip/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            method: config.method.clone(),
            hostname_field: config.hostname_field.clone(),
            auth: auth_struct(&config.auth),
            filter: XmlRpcValue::Struct(
                config
                    .filter
                    .iter()
                    .map(|(k, v)| (k.clone(), XmlRpcValue::from(v.as_str())))
                    .collect(),
            ),
            timeout,
        })
    }

    /// The `methodCall` document sent to the directory.
    pub fn request_body(&self) -> String {
        let return_fields = XmlRpcValue::Array(vec![XmlRpcValue::from(
            self.hostname_field.as_str(),
        )]);
        encode_call(
            &self.method,
            &[self.auth.clone(), self.filter.clone(), return_fields],
        )
    }

    async fn call(&self) -> Result<XmlRpcValue, XmlRpcError> {
        debug!(
            url = %self.url,
            method = %self.method,
            timeout_secs = self.timeout.as_secs(),
            "Calling node directory"
        );

        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, XML_CONTENT_TYPE)
            .body(self.request_body())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(XmlRpcError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;
        debug!(bytes = body.len(), "Directory response received");

        decode_response(&body)
    }

    fn transport_error(&self, e: reqwest::Error) -> XmlRpcError {
        if e.is_timeout() {
            XmlRpcError::Timeout {
                url: self.url.clone(),
            }
        } else {
            XmlRpcError::Transport {
                url: self.url.clone(),
                message: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl NodeDirectory for XmlRpcNodeDirectory {
    async fn fetch_nodes(&self) -> Result<Vec<Node>, DomainError> {
        let nodes = self
            .call()
            .await
            .and_then(|value| nodes_from_value(&value, &self.hostname_field))
            .map_err(|e| {
                warn!(url = %self.url, error = %e, "Node directory call failed");
                DomainError::DirectoryUnavailable(e.to_string())
            })?;

        debug!(nodes = nodes.len(), "Directory returned nodes");
        Ok(nodes)
    }
}

fn auth_struct(auth: &DirectoryAuth) -> XmlRpcValue {
    let mut members: BTreeMap<String, XmlRpcValue> = BTreeMap::new();
    members.insert("AuthMethod".to_string(), auth.method.as_str().into());
    members.insert("Role".to_string(), auth.role.as_str().into());

    if auth.method == AuthMethod::Password {
        members.insert(
            "Username".to_string(),
            auth.username.clone().unwrap_or_default().into(),
        );
        members.insert(
            "AuthString".to_string(),
            auth.password.clone().unwrap_or_default().into(),
        );
    }

    XmlRpcValue::Struct(members)
}

/// Pulls the hostname member out of each returned record, keeping order.
pub fn nodes_from_value(value: &XmlRpcValue, field: &str) -> Result<Vec<Node>, XmlRpcError> {
    let records = value.as_array().ok_or_else(|| {
        XmlRpcError::Malformed("expected an array of node records".to_string())
    })?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let hostname = record
                .as_struct()
                .and_then(|members| members.get(field))
                .and_then(XmlRpcValue::as_str)
                .ok_or_else(|| {
                    XmlRpcError::Malformed(format!(
                        "record {} has no string '{}' member",
                        index, field
                    ))
                })?;

            Node::new(hostname).map_err(|e| {
                XmlRpcError::Malformed(format!("record {}: {}", index, e))
            })
        })
        .collect()
}
