//! Page stream over a list query.

use std::pin::Pin;

use futures_core::Stream;

use crate::Result;
use crate::query::QueryOptions;
use crate::record::RecordPage;
use crate::types::TableRef;

use super::RecordSource;

/// Stream of record pages, fetched one request at a time.
pub type RecordPages<'a> = Pin<Box<dyn Stream<Item = Result<RecordPage>> + Send + 'a>>;

/// Walk a list query page by page.
///
/// The next page is requested only once the previous one has been consumed.
/// The walk ends after the first error, when the source returns no offset,
/// or once `max_records` records have been yielded; the page that crosses
/// the cap is truncated to it.
pub(crate) fn walk<'a, S>(
    source: &'a S,
    table: &'a TableRef,
    options: &'a QueryOptions,
) -> RecordPages<'a>
where
    S: RecordSource + ?Sized,
{
    Box::pin(async_stream::stream! {
        let mut offset: Option<String> = None;
        let mut seen = 0usize;

        loop {
            let mut page = match source.list_page(table, options, offset.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    yield Err(e);
                    break;
                }
            };

            if let Some(max) = options.max_records {
                page.records.truncate((max as usize).saturating_sub(seen));
            }
            seen += page.records.len();
            offset = page.offset.clone();

            let done = offset.is_none() || options.cap_reached(seen);
            yield Ok(page);
            if done {
                break;
            }
        }
    })
}
