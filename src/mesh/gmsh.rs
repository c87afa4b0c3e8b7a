//! Gmsh `.msh` text-format ingest.
//!
//! Scans for the `$Nodes` marker, reads the node count and `<id> <x> <y>
//! <z>` lines, then scans for `$Elements` and reads `<id> <type> <ntags>
//! <tag...> <n1> <n2> <n3>` lines. Only type-2 (three-node triangle)
//! elements are kept; node references are 1-based.

use crate::error::{Result, WallLoadError};
use crate::geometry::Triangle;
use crate::mesh::Mesh;
use crate::vector::Vec3;
use std::path::Path;

fn find_marker<'a>(lines: &mut impl Iterator<Item = &'a str>, path: &Path, marker: &str) -> Result<()> {
    for line in lines.by_ref() {
        if line.trim() == marker {
            return Ok(());
        }
    }
    Err(WallLoadError::malformed(
        path,
        format!("missing '{marker}' section"),
    ))
}

pub(crate) fn load(path: &Path) -> Result<Mesh> {
    let contents = std::fs::read_to_string(path).map_err(|e| WallLoadError::from_io(path, e))?;
    let mut lines = contents.lines();

    find_marker(&mut lines, path, "$Nodes")?;
    let n_nodes: usize = lines
        .next()
        .ok_or_else(|| WallLoadError::malformed(path, "missing node count"))?
        .trim()
        .parse()
        .map_err(|_| WallLoadError::malformed(path, "invalid node count"))?;

    let mut nodes = Vec::with_capacity(n_nodes);
    for _ in 0..n_nodes {
        let line = lines
            .next()
            .ok_or_else(|| WallLoadError::malformed(path, "truncated node list"))?;
        let mut fields = line.split_whitespace();
        let _id = fields.next();
        let x: f64 = parse_field(&mut fields, path)?;
        let y: f64 = parse_field(&mut fields, path)?;
        let z: f64 = parse_field(&mut fields, path)?;
        nodes.push(Vec3::new(x, y, z));
    }

    find_marker(&mut lines, path, "$Elements")?;
    let n_elements: usize = lines
        .next()
        .ok_or_else(|| WallLoadError::malformed(path, "missing element count"))?
        .trim()
        .parse()
        .map_err(|_| WallLoadError::malformed(path, "invalid element count"))?;

    let mut triangles = Vec::new();
    for _ in 0..n_elements {
        let line = lines
            .next()
            .ok_or_else(|| WallLoadError::malformed(path, "truncated element list"))?;
        let mut fields = line.split_whitespace();
        let _id = fields.next();
        let element_type: u32 = parse_field(&mut fields, path)?;
        if element_type != 2 {
            continue;
        }
        let n_tags: usize = parse_field(&mut fields, path)?;
        for _ in 0..n_tags {
            let _tag: i64 = parse_field(&mut fields, path)?;
        }
        let n1: usize = parse_field(&mut fields, path)?;
        let n2: usize = parse_field(&mut fields, path)?;
        let n3: usize = parse_field(&mut fields, path)?;
        let node = |n: usize| -> Result<Vec3> {
            nodes
                .get(n - 1)
                .copied()
                .ok_or_else(|| WallLoadError::malformed(path, format!("node index {n} out of range")))
        };
        triangles.push(Triangle::new(node(n1)?, node(n2)?, node(n3)?));
    }

    Mesh::new(triangles)
}

fn parse_field<T: std::str::FromStr>(
    fields: &mut std::str::SplitWhitespace,
    path: &Path,
) -> Result<T> {
    let tok = fields
        .next()
        .ok_or_else(|| WallLoadError::malformed(path, "unexpected end of element record"))?;
    tok.parse()
        .map_err(|_| WallLoadError::malformed(path, format!("could not parse field '{tok}'")))
}
