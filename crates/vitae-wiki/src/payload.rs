//! Wikibase JSON payloads for date claims

use serde_json::{json, Value};
use vitae_domain::{DateClaim, DatePrecision, Provenance, StructuredDate};

/// Gregorian calendar model item
pub const GREGORIAN: &str = "http://www.wikidata.org/entity/Q1985727";

/// Wikibase precision code for a date
pub fn precision_code(date: &StructuredDate) -> u8 {
    match date.precision() {
        DatePrecision::Year => 9,
        DatePrecision::Day => 11,
    }
}

/// Wikibase timestamp string (`+1923-01-05T00:00:00Z`)
pub fn timestamp(date: &StructuredDate) -> String {
    match *date {
        StructuredDate::Year(year) => format!("{:+05}-00-00T00:00:00Z", year),
        StructuredDate::YearMonthDay { year, month, day } => {
            format!("{:+05}-{:02}-{:02}T00:00:00Z", year, month, day)
        }
    }
}

/// `time` datavalue for a date
pub fn time_value(date: &StructuredDate) -> Value {
    json!({
        "type": "time",
        "value": {
            "time": timestamp(date),
            "timezone": 0,
            "before": 0,
            "after": 0,
            "precision": precision_code(date),
            "calendarmodel": GREGORIAN,
        }
    })
}

fn item_value(item: &str) -> Value {
    let mut value = json!({ "entity-type": "item", "id": item });
    if let Some(numeric) = item.strip_prefix('Q').and_then(|n| n.parse::<u64>().ok()) {
        value["numeric-id"] = json!(numeric);
    }
    json!({ "type": "wikibase-entityid", "value": value })
}

/// Complete statement for `wbsetclaim`, including the provenance reference
///
/// `guid` must be unique per statement: `<item>$<uuid>`.
pub fn statement(claim: &DateClaim, provenance: &Provenance, guid: &str) -> Value {
    json!({
        "id": guid,
        "type": "statement",
        "rank": "normal",
        "mainsnak": {
            "snaktype": "value",
            "property": claim.property(),
            "datavalue": time_value(&claim.date),
        },
        "references": [{
            "snaks": {
                provenance.property: [{
                    "snaktype": "value",
                    "property": provenance.property,
                    "datavalue": item_value(provenance.source_item),
                }]
            },
            "snaks-order": [provenance.property],
        }],
    })
}

/// New statement GUID for an item
pub fn new_guid(claim: &DateClaim) -> String {
    format!("{}${}", claim.item, uuid::Uuid::now_v7())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_domain::{EventKind, ItemId, Locale};

    fn claim(date: StructuredDate) -> DateClaim {
        DateClaim::new("Greta Garbo", ItemId::new("Q5443").unwrap(), EventKind::Birth, date, Locale::Swedish)
    }

    #[test]
    fn test_timestamps() {
        assert_eq!(timestamp(&StructuredDate::Year(1923)), "+1923-00-00T00:00:00Z");
        assert_eq!(
            timestamp(&StructuredDate::year_month_day(1905, 9, 18).unwrap()),
            "+1905-09-18T00:00:00Z"
        );
    }

    #[test]
    fn test_precision_codes() {
        assert_eq!(precision_code(&StructuredDate::Year(1923)), 9);
        assert_eq!(precision_code(&StructuredDate::year_month_day(1923, 1, 5).unwrap()), 11);
    }

    #[test]
    fn test_statement_shape() {
        let claim = claim(StructuredDate::year_month_day(1905, 9, 18).unwrap());
        let provenance = Provenance::imported_from(Locale::Swedish);
        let body = statement(&claim, &provenance, "Q5443$abc");

        assert_eq!(body["id"], "Q5443$abc");
        assert_eq!(body["mainsnak"]["property"], "P569");
        assert_eq!(body["mainsnak"]["datavalue"]["value"]["precision"], 11);
        assert_eq!(body["mainsnak"]["datavalue"]["value"]["calendarmodel"], GREGORIAN);

        let reference = &body["references"][0]["snaks"]["P143"][0];
        assert_eq!(reference["datavalue"]["value"]["id"], "Q169514");
        assert_eq!(reference["datavalue"]["value"]["numeric-id"], 169514);
    }

    #[test]
    fn test_guid_prefix() {
        let guid = new_guid(&claim(StructuredDate::Year(1923)));
        assert!(guid.starts_with("Q5443$"));
        assert_eq!(guid.len(), "Q5443$".len() + 36);
    }
}
