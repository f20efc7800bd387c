// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `5000` |
//! | `SESSION_SECRET` | HMAC secret for session token signing | Built-in development secret |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// Environment variable name for the session token signing secret.
///
/// Session tokens are signed with HS256 using this shared secret. All
/// tokens issued by the process are verified against the same value, so
/// changing it invalidates every outstanding session.
pub const SESSION_SECRET_ENV: &str = "SESSION_SECRET";

/// Fallback signing secret used when `SESSION_SECRET` is not set.
///
/// Suitable for local development only. Production deployments must
/// configure `SESSION_SECRET` explicitly.
pub const DEFAULT_SESSION_SECRET: &str = "yummtumm";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";
