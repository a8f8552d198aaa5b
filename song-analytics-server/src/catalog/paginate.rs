//! Forgiving pagination: malformed or out-of-range parameters fall back to
//! defaults or clamp to the nearest valid page, never to an error.

use serde::Serialize;
use std::num::IntErrorKind;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Requested page and size as sent by the client, before any clamping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

// Integers too large for i64 saturate, so they still clamp like any other
// out-of-range value.
fn parse_int(value: &str) -> Option<i64> {
    match value.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> PageRequest {
        PageRequest {
            page: Some(page),
            size: Some(size),
        }
    }

    /// Builds a request from raw query values; anything that is not an
    /// integer is treated as absent.
    pub fn from_raw(page: Option<&str>, size: Option<&str>) -> PageRequest {
        PageRequest {
            page: page.and_then(parse_int),
            size: size.and_then(parse_int),
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct PageResult<'a, T> {
    pub page: usize,
    pub size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub songs: &'a [T],
}

pub fn paginate<T>(items: &[T], request: PageRequest) -> PageResult<'_, T> {
    let size = request
        .size
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let size = usize::try_from(size).unwrap_or(usize::MAX);

    let total = items.len();
    let total_pages = total.div_ceil(size).max(1);

    let page = request.page.unwrap_or(DEFAULT_PAGE).max(1);
    let page = usize::try_from(page)
        .unwrap_or(usize::MAX)
        .min(total_pages);

    let start = (page - 1).saturating_mul(size).min(total);
    let end = start.saturating_add(size).min(total);

    PageResult {
        page,
        size,
        total,
        total_pages,
        songs: &items[start..end],
    }
}
