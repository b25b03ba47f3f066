//! # Showcase Builder
//!
//! Builds every placement of a manifest on a scoped worker pool and assembles
//! the results under one root group.
//!
//! ## Model
//!
//! - Jobs are `(index, placement)` pairs fed through a crossbeam channel
//! - Each worker composes its placement and writes it into slot `index`
//! - A failure skips every later job; no partial scene is returned
//! - Jobs before a failure still run, so the lowest failing index is the one
//!   reported, whatever order workers finish in

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use curio_assets::{AssetError, AssetRegistry, AssetResult, SceneNode, SceneStats};
use curio_shared::Transform;
use parking_lot::Mutex;

use crate::config::{Placement, ShowcaseConfig};
use crate::error::{ShowcaseError, ShowcaseResult};

/// Timing and sizing of one showcase build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    /// Placements built.
    pub assets: usize,
    /// Worker threads used.
    pub workers: usize,
    /// Wall time for the whole build.
    pub elapsed: Duration,
}

/// A built showcase scene.
#[derive(Debug, Clone)]
pub struct Showcase {
    /// Root group, named after the showcase. One child group per placement,
    /// in manifest order.
    pub root: SceneNode,
    /// Summary of `root`.
    pub stats: SceneStats,
    /// Build timing.
    pub build: BuildReport,
}

fn build_placement(registry: &AssetRegistry, placement: &Placement) -> AssetResult<SceneNode> {
    let asset = registry.build(&placement.asset, &placement.color)?;
    Ok(SceneNode::group(
        placement.display_name().to_string(),
        placement.transform(),
        vec![asset],
    ))
}

/// Builds every placement in `config`.
///
/// # Errors
///
/// [`ShowcaseError::InvalidConfig`] if the manifest fails validation, or
/// [`ShowcaseError::Asset`] for the first placement that cannot be built.
pub fn build_showcase(config: &ShowcaseConfig, registry: &AssetRegistry) -> ShowcaseResult<Showcase> {
    config.validate()?;

    let start = Instant::now();
    let count = config.assets.len();
    let workers = config.worker_count().min(count);

    let slots: Mutex<Vec<Option<SceneNode>>> = Mutex::new(vec![None; count]);
    let first_error: Mutex<Option<(usize, AssetError)>> = Mutex::new(None);
    let fail_at = AtomicUsize::new(usize::MAX);

    let (job_tx, job_rx) = crossbeam_channel::unbounded::<(usize, &Placement)>();

    std::thread::scope(|scope| {
        for worker in 0..workers {
            let job_rx = job_rx.clone();
            let (slots, first_error, fail_at) = (&slots, &first_error, &fail_at);

            scope.spawn(move || {
                let mut built = 0_usize;
                // Keep draining after a failure so the feeder never blocks
                for (index, placement) in job_rx.iter() {
                    if index > fail_at.load(Ordering::Acquire) {
                        continue;
                    }
                    match build_placement(registry, placement) {
                        Ok(node) => {
                            slots.lock()[index] = Some(node);
                            built += 1;
                        }
                        Err(err) => {
                            fail_at.fetch_min(index, Ordering::AcqRel);
                            let mut first = first_error.lock();
                            if first.as_ref().map_or(true, |(i, _)| index < *i) {
                                *first = Some((index, err));
                            }
                        }
                    }
                }
                tracing::trace!(worker, built, "showcase worker finished");
            });
        }
        drop(job_rx);

        for job in config.assets.iter().enumerate() {
            if job_tx.send(job).is_err() {
                break;
            }
        }
        drop(job_tx);
    });

    if let Some((index, source)) = first_error.into_inner() {
        let asset = config.assets[index].asset.clone();
        tracing::warn!(index, asset = %asset, error = %source, "showcase build failed");
        return Err(ShowcaseError::Asset { index, asset, source });
    }

    let children: Vec<SceneNode> = slots.into_inner().into_iter().flatten().collect();
    debug_assert_eq!(children.len(), count);

    let root = SceneNode::group(config.showcase.name.clone(), Transform::IDENTITY, children);
    let stats = root.stats();
    let build = BuildReport { assets: count, workers, elapsed: start.elapsed() };

    tracing::info!(
        name = %config.showcase.name,
        assets = count,
        meshes = stats.meshes,
        workers,
        elapsed_us = u64::try_from(build.elapsed.as_micros()).unwrap_or(u64::MAX),
        "showcase built"
    );

    Ok(Showcase { root, stats, build })
}

/// Indented outline of a tree, one node per line.
#[must_use]
pub fn render_tree(node: &SceneNode) -> String {
    TreeOutline(node).to_string()
}

/// [`fmt::Display`] adapter behind [`render_tree`].
#[derive(Debug, Clone, Copy)]
pub struct TreeOutline<'a>(pub &'a SceneNode);

impl fmt::Display for TreeOutline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self.0, 0, f)
    }
}

fn write_node(node: &SceneNode, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match node {
        SceneNode::Group(g) => writeln!(f, "{indent}{} ({} children)", g.name, g.children.len())?,
        SceneNode::Mesh(m) => writeln!(
            f,
            "{indent}{} [{}] {}",
            m.name,
            m.primitive.kind().name(),
            m.material.base_color
        )?,
    }
    node.children().iter().try_for_each(|child| write_node(child, depth + 1, f))
}
