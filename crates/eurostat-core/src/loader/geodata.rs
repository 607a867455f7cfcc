// crates/eurostat-core/src/loader/geodata.rs

// ---------------------------------------------------------------------------
// FILE GUARD: compiled only with the 'geodata' feature (see loader/mod.rs).
// ---------------------------------------------------------------------------

use super::Eurostat;
use crate::error::{EurostatError, Result};
use crate::fetch::{Compression, ContentMode};
use crate::model::{Attribute, Feature, FeatureCollection};
use shapefile::dbase::{self, FieldValue};
use shapefile::ShapeReader;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Cursor, ErrorKind, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

const LOG_TARGET: &str = "eurostat::geodata";

impl Eurostat {
    /// NUTS boundaries of one administrative level (0 = countries, 1 = major
    /// regions, ...). The archive is cached; the features are re-read on
    /// every call.
    pub fn load_geodata(&self, level: i64) -> Result<FeatureCollection> {
        let path = self.config.geodata_path();
        self.fetch(
            &self.config.geodata_url,
            &path,
            ContentMode::Binary,
            Compression::None,
        );

        let all = read_shapefile_archive(&path)?;
        let selected = all.filter_level(&self.config.level_attribute, level);
        log::debug!(
            target: LOG_TARGET,
            "{} features at level {level}",
            selected.len()
        );
        Ok(selected)
    }
}

/// Read every feature of the first shapefile in a zip bundle, along with
/// its coordinate system when a `.prj` member sits next to it.
pub fn read_shapefile_archive(path: &Path) -> Result<FeatureCollection> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EurostatError::NotCached(path.to_path_buf()),
        _ => EurostatError::Io(e),
    })?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let members = shapefile_members(&archive)?;
    let shp = read_member(&mut archive, &members.shp)?;
    let dbf = read_member(&mut archive, &members.dbf)?;

    let shapes = ShapeReader::new(Cursor::new(shp))?;
    let records = dbase::Reader::new(Cursor::new(dbf))?;
    let mut reader = shapefile::Reader::new(shapes, records);

    let mut features = Vec::new();
    for item in reader.iter_shapes_and_records() {
        let (geometry, record) = item?;
        features.push(Feature {
            geometry,
            properties: properties(record),
        });
    }

    let mut collection = FeatureCollection::new(features);
    if let Some(prj) = &members.prj {
        let wkt = String::from_utf8(read_member(&mut archive, prj)?)?;
        collection = collection.with_crs(wkt.trim());
    }
    Ok(collection)
}

/// Zip members making up one shapefile.
#[derive(Debug, PartialEq, Eq)]
struct Members {
    shp: String,
    dbf: String,
    prj: Option<String>,
}

/// The `.shp` member (first by name) and its siblings sharing the same stem.
fn shapefile_members<R: Read + Seek>(archive: &ZipArchive<R>) -> Result<Members> {
    let shp = archive
        .file_names()
        .filter(|n| has_extension(n, "shp"))
        .min()
        .ok_or_else(|| EurostatError::InvalidArchive("no .shp member".into()))?;
    let stem = &shp[..shp.len() - ".shp".len()];
    let sibling = |ext: &str| {
        archive
            .file_names()
            .find(|n| has_extension(n, ext) && n[..n.len() - ext.len() - 1] == *stem)
            .map(str::to_owned)
    };

    let dbf = sibling("dbf")
        .ok_or_else(|| EurostatError::InvalidArchive(format!("no .dbf next to {shp}")))?;

    Ok(Members {
        shp: shp.to_owned(),
        dbf,
        prj: sibling("prj"),
    })
}

fn has_extension(name: &str, ext: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn read_member<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Vec<u8>> {
    let mut entry = archive.by_name(name)?;
    let mut buf = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or_default());
    entry.read_to_end(&mut buf)?;
    Ok(buf)
}

fn properties(record: dbase::Record) -> BTreeMap<String, Attribute> {
    HashMap::<String, FieldValue>::from(record)
        .into_iter()
        .map(|(name, value)| (name, attribute(value)))
        .collect()
}

fn attribute(value: FieldValue) -> Attribute {
    match value {
        FieldValue::Character(Some(s)) => Attribute::Text(s),
        FieldValue::Memo(s) => Attribute::Text(s),
        FieldValue::Numeric(Some(n)) => Attribute::Number(n),
        FieldValue::Float(Some(f)) => Attribute::Number(f64::from(f)),
        FieldValue::Integer(i) => Attribute::Number(f64::from(i)),
        FieldValue::Double(d) => Attribute::Number(d),
        FieldValue::Logical(Some(b)) => Attribute::Bool(b),
        FieldValue::Character(None)
        | FieldValue::Numeric(None)
        | FieldValue::Float(None)
        | FieldValue::Logical(None) => Attribute::Null,
        other => Attribute::Text(format!("{other:?}")),
    }
}
