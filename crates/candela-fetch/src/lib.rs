//! Bybit kline HTTP client for the candela candlestick history downloader.
//!
//! This crate provides the upstream data source:
//!
//! - [`KlineClient`] - Pooled HTTP client for the v5 market-kline endpoint
//! - [`ClientConfig`] - Client configuration with sane defaults
//! - [`payload::KlineResponse`] - Typed wire payload, validated at the boundary

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candela-data/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod payload;

pub use client::{ClientConfig, KlineClient, MarketCategory, MAINNET_URL, TESTNET_URL};
