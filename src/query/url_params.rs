// src/query/url_params.rs
//
// Query-string codec for `QueryParams`. Sentinel strings ("0", "No Limit",
// "any") only exist here; everything past this point uses `Option`.

use super::facets::{DatePreset, NumericRange, PropertyCategory};
use super::lifecycle::{Lifecycle, TransactionSelector};
use super::params::QueryParams;
use super::sort::SortKey;
use super::tabs::AgencyTab;
use log::debug;
use std::collections::BTreeSet;
use url::form_urlencoded;

/// "Unbounded" spellings for price, PSF and area bounds.
const AMOUNT_SENTINELS: &[&str] = &["0", "No Limit"];
/// "Unbounded" spellings for completion-year bounds.
const YEAR_SENTINELS: &[&str] = &["any"];

fn parse_bound(key: &str, value: &str, sentinels: &[&str]) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() || sentinels.iter().any(|s| s.eq_ignore_ascii_case(value)) {
        return None;
    }

    let cleaned: String = value.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    match cleaned.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => {
            debug!("ignoring unparseable bound {key}={value:?}");
            None
        }
    }
}

fn insert_member(set: &mut BTreeSet<String>, member: &str) {
    let member = member.trim();
    if !member.is_empty() {
        set.insert(member.to_string());
    }
}

fn extend_list(set: &mut BTreeSet<String>, value: &str) {
    for member in value.split(',') {
        insert_member(set, member);
    }
}

/// Percent-decodes one raw query component (`+` becomes a space).
fn decode_component(raw: &str) -> String {
    match form_urlencoded::parse(raw.as_bytes()).next() {
        // `parse` splits at the first `=`, so put it back.
        Some((name, value)) if raw.contains('=') => format!("{name}={value}"),
        Some((name, _)) => name.into_owned(),
        None => String::new(),
    }
}

fn format_bound(value: f64) -> String {
    // "0" is the unbounded sentinel, so a real zero bound keeps its decimal.
    if value == 0.0 {
        return "0.0".to_string();
    }
    // f64 Display drops a trailing ".0", which keeps round trips exact.
    value.to_string()
}

impl QueryParams {
    /// Decodes a form-urlencoded query string, with or without the leading `?`.
    ///
    /// List values split on literal commas only. An encoded `%2C` stays
    /// inside its member, so subtypes such as "Semi-Detached, Corner"
    /// survive a round trip.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = QueryParams::default();

        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let (raw_key, raw_value) = segment.split_once('=').unwrap_or((segment, ""));
            let key = decode_component(raw_key);
            match params.list_mut(&key) {
                Some(set) => {
                    for raw_member in raw_value.split(',') {
                        insert_member(set, &decode_component(raw_member));
                    }
                }
                None => params.apply_pair(&key, &decode_component(raw_value)),
            }
        }
        params
    }

    /// Builds params from already-decoded key/value pairs.
    ///
    /// Unknown keys and unrecognised tokens are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = QueryParams::default();
        for (key, value) in pairs {
            params.apply_pair(key.as_ref(), value.as_ref());
        }
        params
    }

    fn list_mut(&mut self, key: &str) -> Option<&mut BTreeSet<String>> {
        let facets = &mut self.facets;
        match key {
            "bedrooms" => Some(&mut facets.bedrooms),
            "bathrooms" => Some(&mut facets.bathrooms),
            "subtypes" => Some(&mut facets.subtypes),
            "districts" => Some(&mut facets.districts),
            "tenure" => Some(&mut facets.tenures),
            _ => None,
        }
    }

    fn apply_pair(&mut self, key: &str, raw: &str) {
        if let Some(set) = self.list_mut(key) {
            extend_list(set, raw);
            return;
        }

        let facets = &mut self.facets;
        let value = raw.trim();

        match key {
            "transactionType" => {
                if let Some(selector) = TransactionSelector::parse(value) {
                    self.transaction_type = selector;
                }
            }
            "lifecycle" => self.lifecycle = Lifecycle::parse(value),

            "minPrice" => facets.price.min = parse_bound(key, value, AMOUNT_SENTINELS),
            "maxPrice" => facets.price.max = parse_bound(key, value, AMOUNT_SENTINELS),
            "minPsf" => facets.psf.min = parse_bound(key, value, AMOUNT_SENTINELS),
            "maxPsf" => facets.psf.max = parse_bound(key, value, AMOUNT_SENTINELS),
            "minArea" => facets.area.min = parse_bound(key, value, AMOUNT_SENTINELS),
            "maxArea" => facets.area.max = parse_bound(key, value, AMOUNT_SENTINELS),
            "minYear" => facets.year.min = parse_bound(key, value, YEAR_SENTINELS),
            "maxYear" => facets.year.max = parse_bound(key, value, YEAR_SENTINELS),

            "propertyType" => {
                facets.category = PropertyCategory::parse(value).unwrap_or_default();
            }
            // Kept verbatim; matching trims them.
            "keyword" => facets.keyword = Some(raw.to_string()),
            "agent" => facets.agent = Some(raw.to_string()),
            "dateRange" => facets.date_range = DatePreset::parse(value),

            "tab" => self.tab = AgencyTab::parse(value).unwrap_or_default(),
            "sort" => self.sort = SortKey::parse(value),

            _ => debug!("ignoring unknown query parameter {key:?}"),
        }
    }

    /// Encodes the params back into a query string. Only set facets are
    /// written, so the default query encodes to its selector alone.
    /// Decoding the result gives back equal params, as long as list members
    /// carry no surrounding whitespace.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        let facets = &self.facets;

        out.append_pair("transactionType", self.transaction_type.as_str());
        if let Some(lifecycle) = self.lifecycle {
            out.append_pair("lifecycle", lifecycle.as_str());
        }

        let ranges: [(&str, &str, &NumericRange); 4] = [
            ("minPrice", "maxPrice", &facets.price),
            ("minPsf", "maxPsf", &facets.psf),
            ("minArea", "maxArea", &facets.area),
            ("minYear", "maxYear", &facets.year),
        ];
        for (min_key, max_key, range) in ranges {
            if let Some(min) = range.min {
                out.append_pair(min_key, &format_bound(min));
            }
            if let Some(max) = range.max {
                out.append_pair(max_key, &format_bound(max));
            }
        }

        let lists = [
            ("bedrooms", &facets.bedrooms),
            ("bathrooms", &facets.bathrooms),
            ("subtypes", &facets.subtypes),
            ("districts", &facets.districts),
            ("tenure", &facets.tenures),
        ];
        // One pair per member, so commas inside a member are percent-encoded.
        for (key, set) in lists {
            for member in set {
                out.append_pair(key, member);
            }
        }

        if facets.category != PropertyCategory::All {
            out.append_pair("propertyType", facets.category.as_str());
        }
        if let Some(keyword) = &facets.keyword {
            out.append_pair("keyword", keyword);
        }
        if let Some(agent) = &facets.agent {
            out.append_pair("agent", agent);
        }
        if let Some(preset) = facets.date_range {
            out.append_pair("dateRange", preset.as_str());
        }
        if self.tab != AgencyTab::All {
            out.append_pair("tab", self.tab.as_str());
        }
        if let Some(sort) = self.sort {
            out.append_pair("sort", sort.as_str());
        }

        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::sort::UnitSort;

    #[test]
    fn sentinels_mean_unbounded() {
        let params = QueryParams::from_query_string(
            "minPrice=0&maxPrice=No+Limit&minArea=&maxArea=No%20Limit&minYear=any&maxYear=2020",
        );
        assert!(params.facets.price.is_unbounded());
        assert!(params.facets.area.is_unbounded());
        assert_eq!(params.facets.year, NumericRange::new(None, Some(2020.0)));
    }

    #[test]
    fn bounds_accept_currency_formatting() {
        let params = QueryParams::from_query_string("?minPrice=%24500%2C000&maxPsf=2100");
        assert_eq!(params.facets.price.min, Some(500_000.0));
        assert_eq!(params.facets.psf.max, Some(2_100.0));
    }

    #[test]
    fn garbage_and_unknown_keys_are_ignored() {
        let params =
            QueryParams::from_query_string("minPrice=cheap&colour=blue&sort=random&tab=mine");
        assert_eq!(params, QueryParams::default());
    }

    #[test]
    fn list_values_split_on_commas_and_accumulate() {
        let params = QueryParams::from_query_string("bedrooms=2,3&bedrooms=4&districts=D09,+D10");
        let beds: Vec<_> = params.facets.bedrooms.iter().map(String::as_str).collect();
        assert_eq!(beds, vec!["2", "3", "4"]);
        assert!(params.facets.districts.contains("D10"));
    }

    #[test]
    fn encoded_commas_stay_inside_a_list_member() {
        let params = QueryParams::from_query_string("subtypes=Semi-Detached%2C+Corner,Terrace");
        let subtypes: Vec<_> = params.facets.subtypes.iter().map(String::as_str).collect();
        assert_eq!(subtypes, vec!["Semi-Detached, Corner", "Terrace"]);
    }

    #[test]
    fn list_members_with_commas_round_trip() {
        let mut params = QueryParams::default();
        params.facets.subtypes.insert("Semi-Detached, Corner".to_string());
        params.facets.subtypes.insert("Terrace".to_string());

        let encoded = params.to_query_string();
        assert_eq!(
            encoded,
            "transactionType=For+Sale&subtypes=Semi-Detached%2C+Corner&subtypes=Terrace"
        );
        assert_eq!(QueryParams::from_query_string(&encoded), params);
    }

    #[test]
    fn zero_bounds_are_not_read_back_as_unbounded() {
        let mut params = QueryParams::default();
        params.facets.psf = NumericRange::new(None, Some(0.0));
        params.facets.price = NumericRange::new(Some(0.0), Some(1_000_000.0));

        let encoded = params.to_query_string();
        assert!(encoded.contains("maxPsf=0.0"));
        assert!(encoded.contains("minPrice=0.0"));
        assert_eq!(QueryParams::from_query_string(&encoded), params);

        // The bare sentinel still means no limit.
        assert_eq!(
            QueryParams::from_query_string("maxPsf=0").facets.psf,
            NumericRange::default()
        );
    }

    #[test]
    fn keyword_and_agent_keep_their_spacing() {
        let mut params = QueryParams::default();
        params.facets.keyword = Some(" amber ".to_string());
        params.facets.agent = Some("Jane Tan ".to_string());

        assert_eq!(QueryParams::from_query_string(&params.to_query_string()), params);
    }

    #[test]
    fn selector_picks_default_lifecycle() {
        let params = QueryParams::from_query_string("transactionType=transactions");
        assert_eq!(params.transaction_type, TransactionSelector::Transactions);
        assert_eq!(params.effective_lifecycle(), Lifecycle::Transactions);

        let params = QueryParams::from_query_string("transactionType=For+Rent");
        assert_eq!(params.effective_lifecycle(), Lifecycle::Active);
    }

    #[test]
    fn encoding_only_writes_constrained_facets() {
        assert_eq!(
            QueryParams::default().to_query_string(),
            "transactionType=For+Sale"
        );
    }

    #[test]
    fn encoded_query_decodes_to_the_same_params() {
        let mut params = QueryParams::new(TransactionSelector::ForRent)
            .with_tab(AgencyTab::Plb)
            .with_sort(SortKey::Unit(UnitSort::PsfHigh));
        params.facets.price = NumericRange::new(Some(3_000.0), Some(6_500.5));
        params.facets.category = PropertyCategory::Condo;
        params.facets.keyword = Some("orchard & co".to_string());
        extend_list(&mut params.facets.tenures, "Freehold,99-year");

        let decoded = QueryParams::from_query_string(&params.to_query_string());
        assert_eq!(decoded, params);
    }
}
