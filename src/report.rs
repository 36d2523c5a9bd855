//! Census report serialization — the canonical output format.
//!
//! Renders a `NetworkStats` aggregate as a whitespace-delimited text
//! report: up to five tables (motif statistics, node/link motif
//! participation, node/link role participation), each emitted only when its
//! data is present.
//!
//! Format contract:
//! - cells joined by a single space, lines by a single newline
//! - tables separated by exactly one blank line
//! - a non-empty report ends with exactly one trailing newline; a report
//!   with no sections is the empty string
//! - all rows and columns are sorted by raw key ascending, so the output is
//!   independent of registration order

use std::collections::BTreeMap;

use crate::literature::LiteratureTable;
use crate::model::{EntityKind, MotifId, Participation};
use crate::stats::NetworkStats;
use crate::{Error, Result};

// ============================================================================
// Table — the structured builder
// ============================================================================

/// One report section: a header row plus data rows of matching arity.
///
/// Building rows as cell lists keeps column construction testable apart
/// from the final text join.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Cells joined by one space, lines by one newline. No trailing newline.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.header.join(" "));
        for row in &self.rows {
            lines.push(row.join(" "));
        }
        lines.join("\n")
    }
}

// ============================================================================
// render
// ============================================================================

/// Render the full report for `stats`.
///
/// Pure read. Fails with [`Error::IncompleteStatistics`] when a motif's
/// rendered fields are still unset, and with [`Error::SchemaMismatch`] when
/// participation records of one kind disagree on their key sets.
pub fn render(stats: &NetworkStats, literature: &LiteratureTable) -> Result<String> {
    let mut tables = Vec::new();

    if let Some(t) = motif_table(stats, literature)? {
        tables.push(t);
    }

    // Literature labels appear in the node participation header only when
    // every registered motif has a mapping; a single unmapped id falls the
    // whole header back to canonical ids.
    let translate = stats.use_literature_ids
        && stats.motifs().keys().all(|id| literature.contains_key(id));

    let nodes: Vec<(u64, &Participation)> =
        stats.nodes().iter().map(|(k, p)| (k.0, p)).collect();
    let links: Vec<(u64, &Participation)> =
        stats.links().iter().map(|(k, p)| (k.0, p)).collect();

    let node_motif_name = |id: &MotifId| {
        if translate {
            literature
                .get(id)
                .map(|label| (*label).to_string())
                .unwrap_or_else(|| id.to_string())
        } else {
            id.to_string()
        }
    };

    if let Some(t) = participation_table(
        &nodes,
        EntityKind::Node,
        stats.weighted,
        |p| &p.motif_counts,
        |p| &p.weighted_motif_counts,
        node_motif_name,
    )? {
        tables.push(t);
    }

    // Link headers always use canonical ids.
    if let Some(t) = participation_table(
        &links,
        EntityKind::Link,
        stats.weighted,
        |p| &p.motif_counts,
        |p| &p.weighted_motif_counts,
        |id| id.to_string(),
    )? {
        tables.push(t);
    }

    // Role tables: the link table is only considered once the node table
    // has been emitted.
    if let Some(t) = participation_table(
        &nodes,
        EntityKind::Node,
        stats.weighted,
        |p| &p.role_counts,
        |p| &p.weighted_role_counts,
        |role| role.to_string(),
    )? {
        tables.push(t);

        if let Some(t) = participation_table(
            &links,
            EntityKind::Link,
            stats.weighted,
            |p| &p.role_counts,
            |p| &p.weighted_role_counts,
            |role| role.to_string(),
        )? {
            tables.push(t);
        }
    }

    if tables.is_empty() {
        return Ok(String::new());
    }

    let mut out = tables
        .iter()
        .map(Table::to_text)
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push('\n');
    Ok(out)
}

// ============================================================================
// Motif statistics table
// ============================================================================

fn motif_table(stats: &NetworkStats, literature: &LiteratureTable) -> Result<Option<Table>> {
    if stats.motifs().is_empty() {
        return Ok(None);
    }

    let header = ["motif", "real", "rand", "srand", "zscore", "weight-mean", "weight-sd"];
    let mut table = Table::new(header.iter().map(|c| (*c).to_string()).collect());

    for (id, motif) in stats.motifs() {
        // The motif table translates per id; unmapped ids stay canonical.
        let name = if stats.use_literature_ids {
            literature
                .get(id)
                .map(|label| (*label).to_string())
                .unwrap_or_else(|| id.to_string())
        } else {
            id.to_string()
        };

        table.push_row(vec![
            name,
            stat(*id, motif.real_count, "real_count")?.to_string(),
            format!("{:.3}", stat(*id, motif.random_mean, "random_mean")?),
            format!("{:.3}", stat(*id, motif.random_sd, "random_sd")?),
            format!("{:.3}", stat(*id, motif.real_zscore, "real_zscore")?),
            format!("{:.3}", stat(*id, motif.mean_weight, "mean_weight")?),
            format!("{:.3}", stat(*id, motif.sd_weight, "sd_weight")?),
        ]);
    }

    Ok(Some(table))
}

fn stat<T: Copy>(motif: MotifId, value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::IncompleteStatistics { motif, field })
}

// ============================================================================
// Participation tables
// ============================================================================

/// Build one participation table (node or link × motif or role counts).
///
/// The column schema is the key set of the first record; every record must
/// carry exactly that key set in the map being rendered (and, for weighted
/// output, in its weighted counterpart). Returns `Ok(None)` when there are
/// no records or the schema is empty — the section is simply not emitted.
fn participation_table<K>(
    entries: &[(u64, &Participation)],
    kind: EntityKind,
    weighted: bool,
    counts: impl Fn(&Participation) -> &BTreeMap<K, u64>,
    weighted_counts: impl Fn(&Participation) -> &BTreeMap<K, f64>,
    column_name: impl Fn(&K) -> String,
) -> Result<Option<Table>>
where
    K: Ord + Copy,
{
    let Some((_, representative)) = entries.first() else {
        return Ok(None);
    };
    let schema: Vec<K> = counts(representative).keys().copied().collect();
    if schema.is_empty() {
        return Ok(None);
    }

    for (key, p) in entries {
        let uniform = keys_match(counts(p), &schema)
            && (!weighted || keys_match(weighted_counts(p), &schema));
        if !uniform {
            return Err(Error::SchemaMismatch { kind, key: *key });
        }
    }

    let mut header = Vec::with_capacity(schema.len() + 1);
    header.push(kind.to_string());
    header.extend(schema.iter().map(&column_name));
    let mut table = Table::new(header);

    // Key sets are validated identical, so sorted map iteration yields the
    // values in schema order.
    for (key, p) in entries {
        let mut row = Vec::with_capacity(schema.len() + 1);
        row.push(
            p.label
                .clone()
                .unwrap_or_else(|| key.to_string()),
        );
        if weighted {
            row.extend(weighted_counts(p).values().map(|v| v.to_string()));
        } else {
            row.extend(counts(p).values().map(|v| v.to_string()));
        }
        table.push_row(row);
    }

    Ok(Some(table))
}

fn keys_match<K: Ord, V>(map: &BTreeMap<K, V>, schema: &[K]) -> bool {
    map.len() == schema.len() && map.keys().zip(schema.iter()).all(|(a, b)| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RoleId;

    #[test]
    fn test_table_to_text() {
        let mut table = Table::new(vec!["motif".into(), "real".into()]);
        table.push_row(vec!["12".into(), "5".into()]);
        table.push_row(vec!["38".into(), "1".into()]);
        assert_eq!(table.to_text(), "motif real\n12 5\n38 1");
    }

    #[test]
    fn test_table_header_only() {
        let table = Table::new(vec!["node".into(), "1".into()]);
        assert_eq!(table.to_text(), "node 1");
    }

    #[test]
    fn test_participation_skips_empty_schema() {
        let p = Participation::new(Some("a"));
        let entries = vec![(1u64, &p)];
        let table = participation_table(
            &entries,
            EntityKind::Node,
            false,
            |p| &p.role_counts,
            |p| &p.weighted_role_counts,
            |r: &RoleId| r.to_string(),
        )
        .unwrap();
        assert!(table.is_none());
    }

    #[test]
    fn test_participation_schema_mismatch() {
        let mut a = Participation::new(Some("a"));
        a.role_counts.insert(RoleId(1), 2);
        let mut b = Participation::new(Some("b"));
        b.role_counts.insert(RoleId(2), 2);

        let entries = vec![(1u64, &a), (2u64, &b)];
        let err = participation_table(
            &entries,
            EntityKind::Node,
            false,
            |p| &p.role_counts,
            |p| &p.weighted_role_counts,
            |r: &RoleId| r.to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::SchemaMismatch { kind: EntityKind::Node, key: 2 }));
    }

    #[test]
    fn test_participation_label_falls_back_to_key() {
        let mut p = Participation::new(None);
        p.role_counts.insert(RoleId(1), 3);
        let entries = vec![(9u64, &p)];
        let table = participation_table(
            &entries,
            EntityKind::Node,
            false,
            |p| &p.role_counts,
            |p| &p.weighted_role_counts,
            |r: &RoleId| r.to_string(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(table.rows[0][0], "9");
    }
}
