//! 以 IP 為單位的固定時間窗限流

use crate::api::error::ApiError;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};

const LIMIT_HEADER: &str = "ratelimit-limit";
const REMAINING_HEADER: &str = "ratelimit-remaining";
const RESET_HEADER: &str = "ratelimit-reset";

const SWEEP_THRESHOLD: usize = 10_000;

pub const LIMITED_MESSAGE: &str = "Too many requests from this IP, please try again later.";

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed { remaining: u32, reset: Duration },
    Limited { reset: Duration },
}

#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    clients: Mutex<HashMap<IpAddr, Window>>,
}

impl RateLimiter {
    /// `max_requests` 為 0 時停用
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_requests > 0 && !self.window.is_zero()
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn check(&self, ip: IpAddr) -> Decision {
        self.check_at(ip, Instant::now())
    }

    fn check_at(&self, ip: IpAddr, now: Instant) -> Decision {
        let window = self.window;
        let mut clients = self.clients.lock();

        // 超過門檻才整體清掉過期的時間窗
        if clients.len() >= SWEEP_THRESHOLD {
            clients.retain(|_, w| now.duration_since(w.started) < window);
        }

        let entry = clients.entry(ip).or_insert(Window {
            started: now,
            count: 0,
        });
        if now.duration_since(entry.started) >= window {
            *entry = Window {
                started: now,
                count: 0,
            };
        }
        let reset = window.saturating_sub(now.duration_since(entry.started));

        if entry.count >= self.max_requests {
            return Decision::Limited { reset };
        }

        entry.count += 1;
        Decision::Allowed {
            remaining: self.max_requests - entry.count,
            reset,
        }
    }
}

fn set_headers(response: &mut Response, limit: u32, remaining: u32, reset: Duration) {
    let headers = response.headers_mut();
    headers.insert(HeaderName::from_static(LIMIT_HEADER), HeaderValue::from(limit));
    headers.insert(HeaderName::from_static(REMAINING_HEADER), HeaderValue::from(remaining));
    headers.insert(HeaderName::from_static(RESET_HEADER), HeaderValue::from(reset.as_secs()));
}

/// 搭配 `middleware::from_fn_with_state` 使用；取不到連線位址時不限流
pub async fn rate_limit(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    if !limiter.is_enabled() {
        return next.run(request).await;
    }

    let Some(ip) = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
    else {
        return next.run(request).await;
    };

    match limiter.check(ip) {
        Decision::Allowed { remaining, reset } => {
            let mut response = next.run(request).await;
            set_headers(&mut response, limiter.max_requests(), remaining, reset);
            response
        }
        Decision::Limited { reset } => {
            tracing::warn!(%ip, "Rate limit exceeded");
            let mut response = ApiError::TooManyRequests(LIMITED_MESSAGE.to_string()).into_response();
            set_headers(&mut response, limiter.max_requests(), 0, reset);
            response
        }
    }
}
