// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Rollup server client over HTTP/1 with JSON bodies.

use dapp_encoding::HexString;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::client::conn::http1::SendRequest;
use hyper::{header, Method, Request, StatusCode};
use hyper_util::rt::TokioIo;
use primitive_types::H160;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::net::TcpStream;
use tracing::{debug, info, trace};
use url::{Host, Url};

use crate::error::TransportError;
use crate::input::{AdvanceInput, FinishStatus, Input, InspectInput, Metadata};
use crate::output::{Notice, Report, Voucher};
use crate::rollup::Rollup;

const ADVANCE_STATE: &str = "advance_state";
const INSPECT_STATE: &str = "inspect_state";

#[derive(Serialize)]
struct FinishRequest {
    status: FinishStatus,
}

#[derive(Deserialize)]
struct FinishResponse {
    request_type: String,
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct AdvanceRequest {
    metadata: Metadata,
    payload: HexString,
}

#[derive(Deserialize)]
struct InspectRequest {
    payload: HexString,
}

#[derive(Serialize)]
struct VoucherRequest {
    destination: H160,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<HexString>,
    payload: HexString,
}

#[derive(Serialize)]
struct PayloadRequest {
    payload: HexString,
}

#[derive(Deserialize)]
struct IndexResponse {
    index: u64,
}

/// One response of the rollup server.
struct Reply {
    status: StatusCode,
    body: Bytes,
}

impl Reply {
    fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[derive(Debug, Clone)]
pub struct RollupHttp {
    /// Host to connect to, IPv6 addresses without brackets
    host: String,
    port: u16,
    /// Value of the `Host` header
    authority: String,
    base_path: String,
}

impl RollupHttp {
    pub fn new(rollup_url: &str) -> Result<Self, TransportError> {
        let url = Url::parse(rollup_url)?;
        let host = url.host().ok_or(TransportError::UriHostMissing)?;
        let port = url
            .port_or_known_default()
            .ok_or(TransportError::UriPortMissing)?;
        // Display keeps the brackets around IPv6 addresses.
        let authority = format!("{host}:{port}");
        let host = match host {
            Host::Domain(domain) => domain.to_string(),
            Host::Ipv4(ip) => ip.to_string(),
            Host::Ipv6(ip) => ip.to_string(),
        };
        Ok(Self {
            host,
            port,
            authority,
            base_path: url.path().trim_end_matches('/').to_string(),
        })
    }

    async fn connect(&self) -> Result<SendRequest<Full<Bytes>>, TransportError> {
        let stream = TcpStream::connect((self.host.as_str(), self.port)).await?;
        let io = TokioIo::new(stream);

        let (sender, conn) = hyper::client::conn::http1::handshake(io).await?;
        tokio::task::spawn(async move {
            if let Err(err) = conn.await {
                info!("Connection failed: {:?}", err);
            }
        });
        Ok(sender)
    }

    async fn post<T: Serialize>(&self, route: &str, body: &T) -> Result<Reply, TransportError> {
        let body = serde_json::to_vec(body)?;
        let request = Request::builder()
            .method(Method::POST)
            .uri(format!("{}/{route}", self.base_path))
            .header(header::HOST, self.authority.as_str())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(body)))?;

        let mut sender = self.connect().await?;
        let response = sender.send_request(request).await?;
        let status = response.status();
        let body = response.collect().await?.to_bytes();
        trace!(route, %status, size = body.len(), "Rollup server replied");

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(Reply { status, body })
    }
}

fn parse_input(response: FinishResponse) -> Result<Input, TransportError> {
    match response.request_type.as_str() {
        ADVANCE_STATE => {
            let request: AdvanceRequest = serde_json::from_value(response.data)?;
            Ok(Input::Advance(AdvanceInput {
                metadata: request.metadata,
                payload: request.payload.into_inner(),
            }))
        }
        INSPECT_STATE => {
            let request: InspectRequest = serde_json::from_value(response.data)?;
            Ok(Input::Inspect(InspectInput {
                payload: request.payload.into_inner(),
            }))
        }
        _ => Err(TransportError::InvalidRequestType(response.request_type)),
    }
}

impl Rollup for RollupHttp {
    async fn finish(&mut self, status: FinishStatus) -> Result<Option<Input>, TransportError> {
        let reply = self.post("finish", &FinishRequest { status }).await?;
        if reply.status == StatusCode::ACCEPTED {
            debug!("No pending rollup request, trying again");
            return Ok(None);
        }
        parse_input(reply.json()?).map(Some)
    }

    async fn send_voucher(&mut self, voucher: &Voucher) -> Result<u64, TransportError> {
        let request = VoucherRequest {
            destination: voucher.destination,
            value: voucher
                .value
                .map(|value| HexString(Into::<[u8; 32]>::into(value).to_vec())),
            payload: HexString::from(voucher.payload.as_slice()),
        };
        let IndexResponse { index } = self.post("voucher", &request).await?.json()?;
        debug!(index, destination = ?voucher.destination, "Voucher sent");
        Ok(index)
    }

    async fn send_notice(&mut self, notice: &Notice) -> Result<u64, TransportError> {
        let request = PayloadRequest {
            payload: HexString::from(notice.payload.as_slice()),
        };
        let IndexResponse { index } = self.post("notice", &request).await?.json()?;
        debug!(index, "Notice sent");
        Ok(index)
    }

    async fn send_report(&mut self, report: &Report) -> Result<(), TransportError> {
        let request = PayloadRequest {
            payload: HexString::from(report.payload.as_slice()),
        };
        self.post("report", &request).await?;
        debug!(size = report.payload.len(), "Report sent");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rollup_url() {
        let rollup = RollupHttp::new("http://127.0.0.1:8080/rollup/").unwrap();
        assert_eq!(rollup.host, "127.0.0.1");
        assert_eq!(rollup.port, 8080);
        assert_eq!(rollup.base_path, "/rollup");
        assert_eq!(rollup.authority, "127.0.0.1:8080");

        let rollup = RollupHttp::new("http://localhost").unwrap();
        assert_eq!(rollup.port, 80);
        assert_eq!(rollup.base_path, "");

        let rollup = RollupHttp::new("http://[::1]:5004").unwrap();
        assert_eq!(rollup.host, "::1");
        assert_eq!(rollup.authority, "[::1]:5004");

        assert!(matches!(
            RollupHttp::new("not a url"),
            Err(TransportError::Url(_))
        ));
    }

    #[test]
    fn test_parse_advance() {
        let response: FinishResponse = serde_json::from_str(
            r#"{
                "request_type": "advance_state",
                "data": {
                    "metadata": {
                        "msg_sender": "0xfafafafafafafafafafafafafafafafafafafafa",
                        "input_index": 0,
                        "block_number": 1,
                        "timestamp": 2
                    },
                    "payload": "0xdeadbeef"
                }
            }"#,
        )
        .unwrap();
        let Input::Advance(input) = parse_input(response).unwrap() else {
            panic!("expected an advance input");
        };
        assert_eq!(input.metadata.msg_sender, H160::repeat_byte(0xfa));
        assert_eq!(input.payload, vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_parse_unknown_request_type() {
        let response = FinishResponse {
            request_type: "sleep".to_string(),
            data: serde_json::Value::Null,
        };
        assert!(matches!(
            parse_input(response),
            Err(TransportError::InvalidRequestType(kind)) if kind == "sleep"
        ));
    }

    #[test]
    fn test_voucher_json() {
        let request = VoucherRequest {
            destination: H160::repeat_byte(0xab),
            value: None,
            payload: HexString(vec![1, 2]),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"destination":"0xabababababababababababababababababababab","payload":"0x0102"}"#
        );
    }
}
