use glam::Vec3;
use log::{debug, info};

use crate::config::ForestConfig;
use crate::error::Result;
use crate::lsystem::LSystem;
use crate::math::LineSegment;
use crate::placement::{placement_for, NEGATIVE_AXIOM, POSITIVE_AXIOM};
use crate::turtle::{interpret, TurtleConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Positive,
    Negative,
}

#[derive(Clone, Debug)]
pub struct Tree {
    /// Index of the tree along its side, starting at 0.
    pub index: u32,
    pub side: Side,
    pub depth: u32,
    pub origin: Vec3,
    pub segments: Vec<LineSegment>,
}

/// Pairs of trees planted symmetrically about the origin, each pair further
/// out and one generation taller than the last.
#[derive(Clone, Debug, Default)]
pub struct Forest {
    pub trees: Vec<Tree>,
}

impl Forest {
    pub fn generate(config: &ForestConfig) -> Result<Self> {
        config.validate()?;
        let grammar = LSystem::tree();
        let turtle = TurtleConfig {
            step: config.step,
            angle: config.branch_angle,
            axis: config.branch_axis,
        };

        let mut trees = Vec::with_capacity(config.number_trees as usize * 2);
        for index in 0..config.number_trees {
            let depth = config.initial_tree_depth + index;
            let placement_depth = config.initial_placement_depth + index;
            let symbols = grammar.generate(depth);
            debug!("tree {} depth {}: {} symbols", index, depth, symbols.len());

            for (side, axiom) in [(Side::Positive, POSITIVE_AXIOM), (Side::Negative, NEGATIVE_AXIOM)] {
                let offset = placement_for(axiom, placement_depth);
                let origin = Vec3::new(offset.x, config.ground_y, offset.y);
                let segments = interpret(&symbols, origin, &turtle)?;
                trees.push(Tree {
                    index,
                    side,
                    depth,
                    origin,
                    segments,
                });
            }
        }

        let forest = Self { trees };
        info!(
            "forest generated: {} trees, {} segments",
            forest.trees.len(),
            forest.segment_count()
        );
        Ok(forest)
    }

    pub fn segment_count(&self) -> usize {
        self.trees.iter().map(|t| t.segments.len()).sum()
    }

    pub fn segments(&self) -> impl Iterator<Item = &LineSegment> {
        self.trees.iter().flat_map(|t| t.segments.iter())
    }
}
