// SPDX-License-Identifier: MPL-2.0
use std::sync::{Arc, Mutex};
use std::time::Duration;

use apod_lens::application::port::{
    HttpResponse, HttpTransport, LightboxContent, LightboxView, TransportError,
};
use apod_lens::application::GalleryLoader;
use apod_lens::config::{self, Config};
use apod_lens::diagnostics::StatusLog;
use apod_lens::domain::{parse_date, MediaKind, SlotMedia, Status};
use apod_lens::gallery::{activate, SlotActivation};
use apod_lens::lightbox::{Direction, Key, LightboxController, LightboxInput};
use chrono::{Days, NaiveDate};
use tempfile::tempdir;
use url::Url;

/// Serves canned bodies by URL prefix, optionally after a delay.
#[derive(Clone, Default)]
struct FakeApi {
    routes: Arc<Vec<(String, Duration, HttpResponse)>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeApi {
    fn new(routes: Vec<(&str, Duration, HttpResponse)>) -> Self {
        Self {
            routes: Arc::new(
                routes
                    .into_iter()
                    .map(|(prefix, delay, response)| (prefix.to_string(), delay, response))
                    .collect(),
            ),
            requests: Arc::default(),
        }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpTransport for FakeApi {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        let route = self
            .routes
            .iter()
            .find(|(prefix, _, _)| url.as_str().starts_with(prefix.as_str()))
            .cloned();
        match route {
            Some((_, delay, response)) => {
                tokio::time::sleep(delay).await;
                Ok(response)
            }
            None => Err(TransportError::new("no route")),
        }
    }
}

#[derive(Default)]
struct ScreenView {
    media: Option<LightboxContent>,
    caption: String,
    keyboard: bool,
}

impl LightboxView for ScreenView {
    fn mount(&mut self) {}
    fn set_visible(&mut self, _visible: bool) {}
    fn show_media(&mut self, content: &LightboxContent) {
        self.media = Some(content.clone());
    }
    fn clear_media(&mut self) {
        self.media = None;
    }
    fn set_caption(&mut self, caption: &str) {
        self.caption = caption.to_string();
    }
    fn set_explanation(&mut self, _explanation: &str) {}
    fn preload(&mut self, _url: &str) {}
    fn attach_keyboard(&mut self) {
        self.keyboard = true;
    }
    fn detach_keyboard(&mut self) {
        self.keyboard = false;
    }
}

const API: &str = "https://api.nasa.gov/planetary/apod";

fn date(s: &str) -> NaiveDate {
    parse_date(s).unwrap()
}

fn sample_range() -> HttpResponse {
    HttpResponse::new(
        200,
        r#"[
            {"date":"2024-01-01","media_type":"image","title":"Andromeda","url":"https://apod.nasa.gov/apod/image/2401/m31.jpg","explanation":"Our neighbour."},
            {"date":"2024-01-03","media_type":"video","title":"Solar Flare","url":"https://www.youtube.com/embed/AbCdEf123?rel=0","explanation":"A flare.","duration":75}
        ]"#,
    )
}

#[tokio::test]
async fn nine_day_gallery_classifies_every_slot() {
    let api = FakeApi::new(vec![(API, Duration::ZERO, sample_range())]);
    let loader = GalleryLoader::from_config(&Config::default(), api.clone()).unwrap();
    let log = StatusLog::default();

    let gallery = loader
        .load("2024-01-01", date("2024-01-10"), &log)
        .await
        .unwrap()
        .expect("load is current");

    assert!(!gallery.window.truncated);
    assert_eq!(gallery.window.end, date("2024-01-09"));
    assert_eq!(gallery.slots.len(), 9);
    for (offset, slot) in gallery.slots.iter().enumerate() {
        assert_eq!(slot.date, date("2024-01-01") + Days::new(offset as u64));
    }

    match &gallery.slots[0].media {
        SlotMedia::Image(image) => {
            assert_eq!(image.title, "Andromeda");
            assert_eq!(image.url, "https://apod.nasa.gov/apod/image/2401/m31.jpg");
        }
        other => panic!("expected image, got {other:?}"),
    }
    match &gallery.slots[2].media {
        SlotMedia::Video(video) => {
            assert_eq!(
                video.thumbnail.as_deref(),
                Some("https://img.youtube.com/vi/AbCdEf123/hqdefault.jpg")
            );
            assert_eq!(video.duration.map(|d| d.to_string()).as_deref(), Some("1:15"));
        }
        other => panic!("expected video, got {other:?}"),
    }
    for index in [1, 3, 4, 5, 6, 7, 8] {
        assert_eq!(gallery.slots[index].media, SlotMedia::Empty, "slot {index}");
    }

    // One range request; the YouTube thumbnail needed no lookup.
    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("start_date=2024-01-01&end_date=2024-01-09"));
    assert_eq!(
        log.latest(),
        Some(Status::Displayed {
            start: date("2024-01-01")
        })
    );
}

#[tokio::test]
async fn selecting_today_still_renders_nine_slots() {
    let today = date("2024-01-10");
    let body = HttpResponse::new(
        200,
        r#"{"date":"2024-01-10","media_type":"image","title":"Tonight","url":"https://x/t.jpg"}"#,
    );
    let api = FakeApi::new(vec![(API, Duration::ZERO, body)]);
    let loader = GalleryLoader::from_config(&Config::default(), api.clone()).unwrap();

    let gallery = loader
        .load("2024-01-10", today, &StatusLog::default())
        .await
        .unwrap()
        .unwrap();

    assert!(gallery.window.truncated);
    assert_eq!(gallery.window.end, today);
    assert!(api.requests()[0].contains("start_date=2024-01-10&end_date=2024-01-10"));
    assert_eq!(gallery.slots.len(), 9);
    assert_eq!(gallery.slots[0].kind(), MediaKind::Image);
    for slot in &gallery.slots[1..] {
        assert_eq!(slot.media, SlotMedia::Future);
    }
}

#[tokio::test(start_paused = true)]
async fn vimeo_thumbnail_comes_from_oembed() {
    let range = HttpResponse::new(
        200,
        r#"[{"date":"2024-01-02","media_type":"video","title":"Aurora","url":"https://vimeo.com/76979871"}]"#,
    );
    let oembed = HttpResponse::new(200, r#"{"thumbnail_url":"https://i.vimeocdn.com/v/1.jpg"}"#);
    let api = FakeApi::new(vec![
        (API, Duration::ZERO, range),
        ("https://vimeo.com/api/oembed.json", Duration::from_millis(20), oembed),
    ]);
    let loader = GalleryLoader::from_config(&Config::default(), api.clone()).unwrap();

    let gallery = loader
        .load("2024-01-01", date("2024-02-01"), &StatusLog::default())
        .await
        .unwrap()
        .unwrap();

    match &gallery.slots[1].media {
        SlotMedia::Video(video) => {
            assert_eq!(video.thumbnail.as_deref(), Some("https://i.vimeocdn.com/v/1.jpg"));
        }
        other => panic!("expected video, got {other:?}"),
    }
    assert_eq!(api.requests().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn later_request_wins_over_slower_earlier_one() {
    let api = FakeApi::new(vec![
        (
            format!("{API}?start_date=2024-01-01").as_str(),
            Duration::from_secs(2),
            HttpResponse::new(200, "[]"),
        ),
        (
            format!("{API}?start_date=2024-01-05").as_str(),
            Duration::from_millis(10),
            HttpResponse::new(200, "[]"),
        ),
    ]);
    let loader = GalleryLoader::from_config(&Config::default(), api).unwrap();
    let log = StatusLog::default();
    let today = date("2024-02-01");

    let (first, second) = tokio::join!(
        loader.load("2024-01-01", today, &log),
        loader.load("2024-01-05", today, &log),
    );

    assert!(first.unwrap().is_none(), "superseded load must not render");
    let second = second.unwrap().expect("latest load renders");
    assert_eq!(second.window.start, date("2024-01-05"));
    let displayed: Vec<_> = log
        .statuses()
        .into_iter()
        .filter(|s| matches!(s, Status::Displayed { .. }))
        .collect();
    assert_eq!(displayed.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn superseded_load_stops_retrying_and_stays_silent() {
    let older = format!("{API}?start_date=2024-01-01");
    let api = FakeApi::new(vec![
        (older.as_str(), Duration::from_millis(100), HttpResponse::new(503, "")),
        (
            format!("{API}?start_date=2024-01-05").as_str(),
            Duration::from_millis(10),
            HttpResponse::new(200, "[]"),
        ),
    ]);
    let loader = GalleryLoader::from_config(&Config::default(), api.clone()).unwrap();
    let log = StatusLog::default();
    let today = date("2024-02-01");

    let (first, second) = tokio::join!(
        loader.load("2024-01-01", today, &log),
        loader.load("2024-01-05", today, &log),
    );

    assert!(first.unwrap().is_none());
    assert!(second.unwrap().is_some());
    let older_requests = api
        .requests()
        .iter()
        .filter(|url| url.starts_with(&older))
        .count();
    assert_eq!(older_requests, 1);
    assert_eq!(
        log.messages(),
        vec![
            "Loading space photos…".to_string(),
            "Loading space photos…".to_string(),
            "Displayed 9-day view starting 2024-01-05".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn rejected_date_supersedes_load_in_flight() {
    let api = FakeApi::new(vec![(
        API,
        Duration::from_millis(200),
        HttpResponse::new(200, "[]"),
    )]);
    let loader = GalleryLoader::from_config(&Config::default(), api).unwrap();
    let log = StatusLog::default();
    let today = date("2024-02-01");

    let (first, second) = tokio::join!(
        loader.load("2024-01-01", today, &log),
        loader.load("garbage", today, &log),
    );

    assert!(first.unwrap().is_none());
    assert!(second.is_err());
    assert_eq!(
        log.messages(),
        vec![
            "Loading space photos…".to_string(),
            "Invalid start date: \"garbage\"".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn gateway_timeout_is_reported_after_three_attempts() {
    let api = FakeApi::new(vec![(API, Duration::ZERO, HttpResponse::new(504, ""))]);
    let loader = GalleryLoader::from_config(&Config::default(), api.clone()).unwrap();
    let log = StatusLog::default();

    let result = loader.load("2024-01-01", date("2024-02-01"), &log).await;

    assert!(result.is_err());
    assert_eq!(api.requests().len(), 3);
    assert_eq!(
        log.messages(),
        vec![
            "Loading space photos…".to_string(),
            "Network issue, retrying (1/2)...".to_string(),
            "Network issue, retrying (2/2)...".to_string(),
            "Server timeout (504). Try again in a moment.".to_string(),
        ]
    );
}

#[tokio::test]
async fn lightbox_browses_a_loaded_gallery() {
    let api = FakeApi::new(vec![(API, Duration::ZERO, sample_range())]);
    let config = Config::default();
    let loader = GalleryLoader::from_config(&config, api).unwrap();
    let gallery = loader
        .load("2024-01-01", date("2024-01-10"), &StatusLog::default())
        .await
        .unwrap()
        .unwrap();

    let Some(SlotActivation::OpenLightbox(index)) =
        activate(&gallery.slots, 0, &config.api.reference_base_url)
    else {
        panic!("image card should open the lightbox");
    };
    let mut lightbox = LightboxController::from_config(ScreenView::default(), &config);
    lightbox.open(index, Arc::clone(&gallery.slots)).unwrap();
    assert!(lightbox.view().keyboard);

    lightbox.handle(LightboxInput::Key(Key::ArrowRight));
    lightbox.handle(LightboxInput::Key(Key::ArrowRight));
    assert_eq!(
        lightbox.view().media,
        Some(LightboxContent::Player {
            embed_url: "https://www.youtube.com/embed/AbCdEf123?rel=0&autoplay=1".into()
        })
    );
    assert_eq!(lightbox.view().caption, "2024-01-03 — Solar Flare");

    assert_eq!(lightbox.navigate(Direction::Previous), Some(1));
    assert_eq!(
        lightbox.view().media,
        Some(LightboxContent::ReferencePage {
            url: "https://apod.nasa.gov/apod/ap240102.html".into()
        })
    );

    lightbox.handle(LightboxInput::Key(Key::Escape));
    assert_eq!(lightbox.view().media, None);
    assert!(!lightbox.view().keyboard);
}

#[test]
fn settings_file_drives_the_loader() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.api.endpoint = "https://mirror.example.org/apod".to_string();
    settings.api.api_key = "abc123".to_string();
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded.api.endpoint, "https://mirror.example.org/apod");
    assert!(GalleryLoader::from_config(&loaded, FakeApi::default()).is_ok());

    dir.close().expect("Failed to close temporary directory");
}
