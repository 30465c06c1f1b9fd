use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::{
    error::NetworkError,
    network::{MetroNetwork, Station},
    routing::{Route, fastest_route, fewest_edges_route, route_duration},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary<'a> {
    pub total_time: u64,
    pub line_changes: usize,
    pub stations: Vec<&'a Station>,
}

impl<'a> RouteSummary<'a> {
    fn new(route: Route<'a>, total_time: u64) -> Self {
        Self {
            total_time,
            line_changes: route.line_changes(),
            stations: route.stations().to_vec(),
        }
    }
}

impl fmt::Display for RouteSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let changes = match self.line_changes {
            1 => "1 line change".to_string(),
            n => format!("{n} line changes"),
        };
        write!(
            f,
            "({} min, {changes}): {}",
            self.total_time,
            self.stations.iter().map(|s| &s.name).join(" -> ")
        )
    }
}

/// Both route kinds between one pair of stations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryReport<'a> {
    pub from: &'a Station,
    pub to: &'a Station,
    pub fewest_stops: Option<RouteSummary<'a>>,
    pub fastest: Option<RouteSummary<'a>>,
}

impl<'a> QueryReport<'a> {
    pub fn build(
        network: &'a MetroNetwork,
        from: &'a Station,
        to: &'a Station,
    ) -> Result<Self, NetworkError> {
        let fewest_stops = fewest_edges_route(network, from.id.as_str(), to.id.as_str())
            .map(|route| {
                let time = route_duration(network, route.stations())?;
                Ok::<_, NetworkError>(RouteSummary::new(route, time))
            })
            .transpose()?;

        let fastest = fastest_route(network, from.id.as_str(), to.id.as_str())
            .map(|(route, time)| RouteSummary::new(route, time));

        Ok(Self {
            from,
            to,
            fewest_stops,
            fastest,
        })
    }
}

impl fmt::Display for QueryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({}) -> {} ({})",
            self.from.name, self.from.id, self.to.name, self.to.id
        )?;
        write_route(f, "Fewest stops", self.fewest_stops.as_ref())?;
        write_route(f, "Fastest", self.fastest.as_ref())
    }
}

fn write_route(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    summary: Option<&RouteSummary<'_>>,
) -> fmt::Result {
    match summary {
        Some(summary) => writeln!(f, "  {label} {summary}"),
        None => writeln!(f, "  {label}: no route found"),
    }
}

#[derive(Debug, Serialize)]
pub struct LineReport<'a> {
    pub line: &'a str,
    pub stations: Vec<&'a Station>,
}

impl fmt::Display for LineReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.line,
            self.stations
                .iter()
                .map(|s| format!("{} ({})", s.name, s.id))
                .join(", ")
        )
    }
}

pub fn line_reports(network: &MetroNetwork) -> Vec<LineReport<'_>> {
    network
        .stations_by_line()
        .into_iter()
        .map(|(line, stations)| LineReport { line, stations })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::tests::ankara;

    fn report<'a>(network: &'a MetroNetwork, from: &str, to: &str) -> QueryReport<'a> {
        QueryReport::build(
            network,
            network.station(from).unwrap(),
            network.station(to).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn human_report_lists_both_routes() {
        let network = ankara();
        let text = report(&network, "T3", "K2").to_string();

        assert_eq!(
            text,
            "Gar(T) (T3) -> Ulus (K2)\n\
             \x20 Fewest stops (18 min, 1 line change): Gar(T) -> Demetevler(T) -> Demetevler(K) -> Ulus\n\
             \x20 Fastest (15 min, 2 line changes): Gar(T) -> Gar(M) -> Sıhhiye -> Kızılay(M) -> Kızılay(K) -> Ulus\n"
        );
    }

    #[test]
    fn missing_route_is_informational() {
        let mut network = ankara();
        network.add_station("Z1", "Island", "Grey");
        let text = report(&network, "M1", "Z1").to_string();

        assert!(text.contains("Fewest stops: no route found"));
        assert!(text.contains("Fastest: no route found"));
    }

    #[test]
    fn json_report_uses_camel_case() {
        let network = ankara();
        let value = serde_json::to_value(report(&network, "M1", "M2")).unwrap();

        assert_eq!(value["from"]["id"], "M1");
        assert_eq!(value["fastest"]["totalTime"], 5);
        assert_eq!(value["fewestStops"]["lineChanges"], 0);
        assert_eq!(value["fastest"]["stations"][1]["name"], "Kızılay(M)");
    }

    #[test]
    fn lines_are_listed_by_name() {
        let network = ankara();
        let lines = line_reports(&network);

        let names: Vec<_> = lines.iter().map(|l| l.line).collect();
        assert_eq!(names, vec!["Kırmızı Hat", "Mavi Hat", "Turuncu Hat"]);
        assert_eq!(
            lines[1].to_string(),
            "Mavi Hat: AŞTİ (M1), Kızılay(M) (M2), Sıhhiye (M3), Gar(M) (M4)"
        );
    }
}
