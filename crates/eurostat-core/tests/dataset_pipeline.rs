//! End-to-end tests over a real upstream sample, with an in-memory
//! transport and a hand-driven clock in place of the network and wall time.

use eurostat_core::prelude::*;
use eurostat_core::{Clock, Transport};
use flate2::write::GzEncoder;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

const DATASET_FIXTURE: &str = "tests/fixtures/tps00001.tsv";
const GEO_FIXTURE: &str = "tests/fixtures/geo.dic";
const INDIC_FIXTURE: &str = "tests/fixtures/indic_de.dic";

#[derive(Clone, Default)]
struct RecordingTransport {
    bodies: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingTransport {
    fn serve(&self, url: &str, body: Vec<u8>) {
        self.bodies.lock().unwrap().insert(url.to_owned(), body);
    }

    fn calls_to(&self, suffix: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| u.ends_with(suffix)).count()
    }
}

impl Transport for RecordingTransport {
    fn get(&self, url: &str) -> eurostat_core::Result<Vec<u8>> {
        self.calls.lock().unwrap().push(url.to_owned());
        self.bodies
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| EurostatError::Status {
                url: url.to_owned(),
                status: 404,
            })
    }
}

struct TestClock(Mutex<SystemTime>);

impl TestClock {
    fn advance_hours(&self, hours: u64) {
        *self.0.lock().unwrap() += Duration::from_secs(hours * 3600);
    }
}

impl Clock for TestClock {
    fn now(&self) -> SystemTime {
        *self.0.lock().unwrap()
    }
}

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

struct Harness {
    _dir: tempfile::TempDir,
    transport: RecordingTransport,
    clock: Arc<TestClock>,
    eurostat: Eurostat,
}

fn harness() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let transport = RecordingTransport::default();
    transport.serve(
        "http://bulk.test/data/tps00001.tsv.gz",
        gzip(&fs::read(DATASET_FIXTURE).unwrap()),
    );
    transport.serve("http://bulk.test/dic/geo.dic", fs::read(GEO_FIXTURE).unwrap());
    transport.serve("http://bulk.test/dic/indic_de.dic", fs::read(INDIC_FIXTURE).unwrap());

    let clock = Arc::new(TestClock(Mutex::new(SystemTime::now())));
    let config = Config::new(dir.path())
        .with_dataset_url("http://bulk.test/data/{name}.tsv.gz")
        .with_dictionary_url("http://bulk.test/dic/{name}.dic");
    let eurostat = Eurostat::with_parts(config, Box::new(transport.clone()), clock.clone());

    Harness {
        _dir: dir,
        transport,
        clock,
        eurostat,
    }
}

fn raw_options() -> DatasetOptions {
    DatasetOptions::default().translate_codes(false).transpose(false)
}

#[test]
fn upstream_sample_parses_with_flag_quirks() {
    let h = harness();
    let table = h.eurostat.load_dataset("tps00001", &raw_options()).unwrap();

    assert_eq!(table.dimensions(), ["indic_de", "geo"]);
    assert_eq!(table.periods(), ["2011", "2012", "2013", "2014", "2015"]);
    assert_eq!(table.row_count(), 6);

    let series = |geo: &str| table.series_index(&["JAN", geo]).unwrap();
    let period = |p: &str| table.period_index(p).unwrap();

    // Every observation of Andorra is the missing marker.
    assert!((0..5).all(|p| table.value(series("AD"), p).is_none()));

    assert_eq!(
        table.value(series("AL"), period("2011")),
        Some(&Value::Number(2_905_195.0))
    );
    // A one-letter flag before a tab is swallowed by the separator.
    assert_eq!(
        table.value(series("FR"), period("2013")),
        Some(&Value::Number(65_600_350.0))
    );
    // A two-letter flag is not, and turns its whole column into text.
    assert_eq!(
        table.value(series("EU28"), period("2014")),
        Some(&Value::Text("507235091 ep".into()))
    );
    assert_eq!(
        table.value(series("AT"), period("2014")),
        Some(&Value::Text("8507786".into()))
    );
    // A flag at the end of a line has no tab after it either.
    assert_eq!(
        table.value(series("DE"), period("2015")),
        Some(&Value::Text("81197537 b".into()))
    );
    // Line padding after the last value is not part of the value.
    assert_eq!(
        table.value(series("EU28"), period("2015")),
        Some(&Value::Text("508520205".into()))
    );
}

#[test]
fn translated_and_transposed_by_default() {
    let h = harness();
    let table = h
        .eurostat
        .load_dataset("TPS00001", &DatasetOptions::default())
        .unwrap();

    assert_eq!(table.layout(), Layout::Transposed);
    assert_eq!(table.row_count(), 5);
    assert_eq!(table.column_count(), 6);

    let fr = table
        .series_index(&["Population on 1 January - total", "France"])
        .unwrap();
    let p2012 = table.period_index("2012").unwrap();
    assert_eq!(table.cell(p2012, fr), Some(&Value::Number(65_276_983.0)));

    assert_eq!(h.transport.calls_to("geo.dic"), 1);
    assert_eq!(h.transport.calls_to("indic_de.dic"), 1);
}

#[test]
fn repeated_loads_within_a_day_download_once() {
    let h = harness();
    let options = DatasetOptions::default();

    h.eurostat.load_dataset("tps00001", &options).unwrap();
    h.clock.advance_hours(12);
    h.eurostat.load_dataset("tps00001", &options).unwrap();
    assert_eq!(h.transport.calls_to("tps00001.tsv.gz"), 1);
    assert_eq!(h.transport.calls_to("geo.dic"), 1);

    h.clock.advance_hours(13);
    h.eurostat.load_dataset("tps00001", &options).unwrap();
    assert_eq!(h.transport.calls_to("tps00001.tsv.gz"), 2);
    assert_eq!(h.transport.calls_to("geo.dic"), 2);
}

#[test]
fn stale_cache_survives_an_outage() {
    let h = harness();
    h.eurostat.load_dataset("tps00001", &raw_options()).unwrap();
    let cached = fs::read_to_string(h.eurostat.config().dataset_path("tps00001")).unwrap();

    h.transport.bodies.lock().unwrap().clear();
    h.clock.advance_hours(48);

    let table = h.eurostat.load_dataset("tps00001", &raw_options()).unwrap();
    assert_eq!(table.row_count(), 6);
    assert_eq!(
        fs::read_to_string(h.eurostat.config().dataset_path("tps00001")).unwrap(),
        cached
    );
    assert_eq!(h.transport.calls_to("tps00001.tsv.gz"), 2);
}

#[test]
fn refreshed_content_replaces_the_cache() {
    let h = harness();
    h.eurostat.load_dataset("tps00001", &raw_options()).unwrap();

    h.transport.serve(
        "http://bulk.test/data/tps00001.tsv.gz",
        gzip(b"indic_de,geo\\time\t2016 \nJAN,AL\t2876591 \n"),
    );
    h.clock.advance_hours(25);

    let table = h.eurostat.load_dataset("tps00001", &raw_options()).unwrap();
    assert_eq!(table.periods(), ["2016"]);
    assert_eq!(table.value(0, 0), Some(&Value::Number(2_876_591.0)));
}

#[test]
fn missing_dictionary_leaves_codes_alone() {
    let h = harness();
    h.transport.bodies.lock().unwrap().remove("http://bulk.test/dic/geo.dic");

    let table = h
        .eurostat
        .load_dataset("tps00001", &DatasetOptions::default().transpose(false))
        .unwrap();
    assert_eq!(
        table.dimension_values("geo").unwrap(),
        vec!["AD", "AL", "AT", "DE", "EU28", "FR"]
    );
    assert_eq!(
        table.dimension_values("indic_de").unwrap()[0],
        "Population on 1 January - total"
    );
}

#[test]
fn client_loads_from_another_thread() {
    let h = harness();
    let eurostat = Arc::new(h.eurostat);
    let worker = Arc::clone(&eurostat);
    let rows = std::thread::spawn(move || {
        worker
            .load_dataset("tps00001", &raw_options())
            .map(|t| t.row_count())
    })
    .join()
    .unwrap()
    .unwrap();
    assert_eq!(rows, 6);
    assert_eq!(eurostat.load_dictionary("geo", false).len(), 6);
}

#[test]
fn inverse_dictionary_from_cache() {
    let h = harness();
    let inverse = h.eurostat.load_dictionary("GEO", true);
    assert_eq!(inverse.get("Albania").map(String::as_str), Some("AL"));
    assert_eq!(inverse.len(), 6);
    assert_eq!(
        h.eurostat.age_in_hours(h.eurostat.config().dictionary_path("geo")),
        0
    );
}
