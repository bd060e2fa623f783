use std::io::BufRead;

use crate::error::Result;
use crate::geo::GeoPoint;
use crate::graph::Graph;

/// Reads `id,longitude,latitude` records and adds one vertex per line.
/// Lines that do not parse (including any header) are skipped.
pub(crate) fn read_nodes(reader: impl BufRead, graph: &mut Graph) -> Result<()> {
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line?;
        let Some((id, lon, lat)) = parse_node(line.trim_end_matches('\r')) else {
            skipped += 1;
            continue;
        };
        log::trace!("loader: node id={id} at={}", GeoPoint::new(lat, lon));
        graph.add_vertex_with_coords(id, lon, lat);
    }
    if skipped > 0 {
        log::warn!("loader: nodes_skipped={skipped}");
    }
    log::info!("loader: vertices={}", graph.vertex_count());
    Ok(())
}

/// Reads `origin,dest,weight` records. Each record contributes one
/// bidirectional edge; endpoints unseen so far are created without
/// coordinates. Unparsable lines are skipped.
pub(crate) fn read_edges(reader: impl BufRead, graph: &mut Graph) -> Result<()> {
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line?;
        let Some((origin, dest, weight)) = parse_edge(line.trim_end_matches('\r')) else {
            skipped += 1;
            continue;
        };
        if graph.find_vertex(origin).is_none() {
            graph.add_vertex(origin);
        }
        if graph.find_vertex(dest).is_none() {
            graph.add_vertex(dest);
        }
        graph.add_bidirectional_edge(origin, dest, weight);
    }
    if skipped > 0 {
        log::warn!("loader: edges_skipped={skipped}");
    }
    log::info!(
        "loader: vertices={} directed_edges={}",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(())
}

fn parse_node(line: &str) -> Option<(u32, f64, f64)> {
    let mut fields = line.split(',');
    let id = fields.next()?.trim().parse().ok()?;
    let lon = fields.next()?.trim().parse().ok()?;
    let lat = fields.next()?.trim().parse().ok()?;
    Some((id, lon, lat))
}

fn parse_edge(line: &str) -> Option<(u32, u32, f64)> {
    let mut fields = line.split(',');
    let origin = fields.next()?.trim().parse().ok()?;
    let dest = fields.next()?.trim().parse().ok()?;
    let weight = fields.next()?.trim().parse().ok()?;
    Some((origin, dest, weight))
}
