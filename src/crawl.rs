use std::sync::LazyLock;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};

use crate::course::Semester;
use crate::error::FetchError;
use crate::parser;
use crate::parser::extract::description;
use crate::store::CourseSink;

const SEARCH_URL: &str = "http://registrar-prod.unet.brandeis.edu/registrar/schedule/search";
// Detail hrefs are relative to the schedule root; the slash layout is fixed,
// so no URL joining is needed.
const SCHEDULE_BASE_URL: &str = "http://registrar-prod.unet.brandeis.edu/registrar/schedule/";

static PAGE_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.pagenumber").unwrap());

/// The registrar's term encoding. Must match the server's arithmetic
/// exactly or every query resolves to the wrong term.
pub fn term_code(year: u32, semester: Semester) -> u32 {
    1000 + 10 * (year % 100) + semester.term_index() + 1
}

/// Per-subject browse URL ("all", "UGRD", or "GRAD").
pub fn schedule_url(year: u32, semester: Semester, subject: u32, kind: &str) -> String {
    format!("{SCHEDULE_BASE_URL}classes/{year}/{semester}/{subject}/{kind}")
}

/// The "show everything" search query: all days, the full time window, no
/// status/block/keyword filters.
pub fn search_params(page: u32, year: u32, semester: Semester) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("strm", term_code(year, semester).to_string()),
        ("view", "all".to_string()),
        ("time", "time".to_string()),
    ];
    for day in ["mon", "tues", "wed", "thurs", "fri", "sat", "sun"] {
        params.push(("day", day.to_string()));
    }
    params.extend([
        ("start_time", "00:00:00".to_string()),
        ("end_time", "23:59:59".to_string()),
        ("order", "class".to_string()),
        ("search", "Search".to_string()),
        ("subsequent", "1".to_string()),
        ("status", String::new()),
        ("block", String::new()),
        ("keywords", String::new()),
        ("page", page.to_string()),
    ]);
    params
}

/// Largest all-digit page-link label on a results page. `None` when the
/// result set fits on a single page and no pagination is rendered.
pub fn max_page_label(doc: &Html) -> Option<u32> {
    doc.select(&PAGE_LINK)
        .filter_map(|a| {
            let label: String = a.text().collect();
            let label = label.trim();
            if !label.is_empty() && label.chars().all(|c| c.is_ascii_digit()) {
                label.parse().ok()
            } else {
                None
            }
        })
        .max()
}

/// Fetch page 1 of the term's query and read the page count off its
/// pagination links.
pub async fn discover_page_count(
    client: &Client,
    year: u32,
    semester: Semester,
) -> Result<u32, FetchError> {
    let body = get_search_page(client, 1, year, semester).await?;
    let doc = Html::parse_document(&body);
    Ok(max_page_label(&doc).unwrap_or(1))
}

pub struct CrawlOptions {
    pub year: u32,
    pub semester: Semester,
    pub start_page: u32,
    pub fetch_descriptions: bool,
}

pub struct CrawlStats {
    pub pages: u32,
    pub courses: usize,
    pub dropped: usize,
}

/// Crawl one term: discover the page count, then fetch pages in order,
/// writing each page's courses to the sink as soon as they are extracted.
/// Any non-success response aborts the run; between pages the crawl sleeps
/// a random 1–15 s so the registrar isn't hammered.
pub async fn crawl_term(
    client: &Client,
    opts: &CrawlOptions,
    sink: &mut CourseSink,
) -> Result<CrawlStats> {
    let end_page = discover_page_count(client, opts.year, opts.semester).await?;
    info!("{} {}: {} page(s)", opts.year, opts.semester, end_page);
    if opts.start_page > end_page {
        warn!(
            "start page {} is past the last page {}; nothing to do",
            opts.start_page, end_page
        );
    }

    let total_pages = (end_page + 1).saturating_sub(opts.start_page);
    let pb = ProgressBar::new(u64::from(total_pages));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} page {pos}/{len} ({msg})")?
            .progress_chars("=> "),
    );

    let mut stats = CrawlStats {
        pages: 0,
        courses: 0,
        dropped: 0,
    };

    for page in opts.start_page..=end_page {
        let body = get_search_page(client, page, opts.year, opts.semester).await?;
        let extracted = parser::extract_page(&body)?;
        stats.dropped += extracted.dropped;

        for row in extracted.rows {
            let mut course = row.course;
            if opts.fetch_descriptions {
                if let Some(path) = row.detail_path.as_deref() {
                    let detail = get_html(client, &format!("{SCHEDULE_BASE_URL}{path}")).await?;
                    match description::first_paragraph(&detail) {
                        Ok(text) => course.description = Some(text),
                        Err(e) if e.is_fatal() => return Err(e.into()),
                        Err(e) => {
                            warn!("dropping {}: {e}", course.friendly_number());
                            stats.dropped += 1;
                            continue;
                        }
                    }
                }
            }
            course.year = Some(opts.year);
            course.semester = Some(opts.semester);
            sink.write(&course)?;
            stats.courses += 1;
            pb.set_message(course.friendly_number());
        }

        stats.pages += 1;
        pb.inc(1);

        if page != end_page {
            let secs = rand::rng().random_range(1..=15u64);
            debug!("sleeping {secs}s before page {}", page + 1);
            tokio::time::sleep(Duration::from_secs(secs)).await;
        }
    }

    pb.finish_and_clear();
    info!(
        "{} {}: {} courses from {} page(s), {} row(s) dropped",
        opts.year, opts.semester, stats.courses, stats.pages, stats.dropped
    );
    Ok(stats)
}

async fn get_search_page(
    client: &Client,
    page: u32,
    year: u32,
    semester: Semester,
) -> Result<String, FetchError> {
    let resp = client
        .get(SEARCH_URL)
        .query(&search_params(page, year, semester))
        .send()
        .await?;
    if !resp.status().is_success() {
        return Err(FetchError::Status {
            url: resp.url().to_string(),
            status: resp.status(),
        });
    }
    Ok(resp.text().await?)
}

async fn get_html(client: &Client, url: &str) -> Result<String, FetchError> {
    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    Ok(resp.text().await?)
}

// ── Tests ──
