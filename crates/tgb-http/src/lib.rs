//! `reqwest` transport for `tgb-core`.
//!
//! Calls without uploads go out as a JSON body; calls with uploads as
//! `multipart/form-data` with every non-string field JSON-encoded.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tgb_core::{errors::Error, Bot, Config, Params, RawResponse, Result, Transport};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    read_timeout: Duration,
}

impl HttpTransport {
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| Error::Config(format!("http client build error: {e}")))?;
        Ok(Self { http, read_timeout })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(cfg.connect_timeout, cfg.read_timeout)
    }

    fn map_err(e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::TimedOut
        } else {
            Error::Network(e.to_string())
        }
    }

    async fn multipart(params: &Params) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in params.form_fields() {
            form = form.text(name, value);
        }
        for (name, file) in params.files() {
            let bytes = file.read().await?;
            let part = Part::bytes(bytes)
                .file_name(file.file_name().unwrap_or_default())
                .mime_str(file.mime_type())
                .map_err(|e| Error::Network(format!("multipart error: {e}")))?;
            form = form.part(name.clone(), part);
        }
        Ok(form)
    }

    async fn into_raw(resp: reqwest::Response) -> Result<RawResponse> {
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(Self::map_err)?.to_vec();
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, timeout: Option<Duration>) -> Result<RawResponse> {
        let resp = self
            .http
            .get(url)
            .timeout(timeout.unwrap_or(self.read_timeout))
            .send()
            .await
            .map_err(Self::map_err)?;
        Self::into_raw(resp).await
    }

    async fn post(
        &self,
        url: &str,
        params: Params,
        timeout: Option<Duration>,
    ) -> Result<RawResponse> {
        let req = self
            .http
            .post(url)
            .timeout(timeout.unwrap_or(self.read_timeout));

        let req = if params.has_uploads() {
            debug!(files = params.files().len(), "multipart upload");
            req.multipart(Self::multipart(&params).await?)
        } else {
            req.json(&params.to_json())
        };

        let resp = req.send().await.map_err(Self::map_err)?;
        Self::into_raw(resp).await
    }

    async fn download(&self, url: &str, timeout: Option<Duration>) -> Result<Vec<u8>> {
        let resp = self
            .http
            .get(url)
            .timeout(timeout.unwrap_or(self.read_timeout))
            .send()
            .await
            .map_err(Self::map_err)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Api {
                code: status.as_u16(),
                description: format!("file download failed: {status}"),
            });
        }

        Ok(resp.bytes().await.map_err(Self::map_err)?.to_vec())
    }
}

/// A [`Bot`] on an [`HttpTransport`] built from the same config.
pub fn bot_from_config(cfg: &Config) -> Result<Bot> {
    let transport = HttpTransport::from_config(cfg)?;
    Bot::from_config(cfg, Arc::new(transport))
}
