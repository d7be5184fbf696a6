use serde::Serialize;
use tera::{Context, Tera};

use super::{Export, FormatError};
use crate::graph::{layout, UndirectedGraph};
use crate::util::{scale::PointScaler, Point};

const TEMPLATE: &str = include_str!("../../templates/graph.svg");

#[derive(Serialize)]
struct DrawnNode {
    id: usize,
    x: f64,
    y: f64,
}

/// Renders a graph as SVG with its nodes placed on a circle.
pub struct SVG {
    pub width: usize,
    pub height: usize,
    pub padding: usize,
    pub node_radius: usize,
}

impl Default for SVG {
    fn default() -> Self {
        SVG {
            width: 600,
            height: 600,
            padding: 40,
            node_radius: 12,
        }
    }
}

impl SVG {
    fn scaled_point(&self, point: &Point, scaler: &PointScaler) -> Point {
        let scaled_point = scaler.scale_point(point);

        // The scaled point needs to be adjusted to our SVG canvas size and padding.
        Point {
            x: round(scaled_point.x * self.width as f64 + self.padding as f64),
            y: round(scaled_point.y * -(self.height as f64) + (self.padding + self.height) as f64),
        }
    }

    fn edge_path(&self, from: &Point, to: &Point) -> String {
        if from == to {
            // A loop is drawn as a small circle touching its node from above.
            let r = self.node_radius;
            format!("M {} {} a {} {} 0 1 1 0.01 0", from.x, from.y, r, r)
        } else {
            format!("M {} {} L {} {}", from.x, from.y, to.x, to.y)
        }
    }
}

impl Export for SVG {
    fn export(&self, graph: &UndirectedGraph, name: &str) -> Result<String, FormatError> {
        let positions = layout::circle(graph.order());
        let scaler = PointScaler::from_point_iterator(positions.iter().copied());
        let drawn: Vec<Point> = positions
            .iter()
            .map(|point| self.scaled_point(point, &scaler))
            .collect();

        let nodes: Vec<DrawnNode> = drawn
            .iter()
            .enumerate()
            .map(|(id, point)| DrawnNode {
                id,
                x: point.x,
                y: point.y,
            })
            .collect();
        let paths: Vec<String> = graph
            .iter_edges()
            .map(|(from, to)| self.edge_path(&drawn[from], &drawn[to]))
            .collect();

        let mut context = Context::new();
        context.insert("name", name);
        context.insert("width", &(self.width + 2 * self.padding));
        context.insert("height", &(self.height + 2 * self.padding));
        context.insert("radius", &self.node_radius);
        context.insert("font_size", &self.node_radius);
        context.insert("nodes", &nodes);
        context.insert("paths", &paths);

        Ok(Tera::one_off(TEMPLATE, &context, true)?)
    }
}

fn round(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_node_and_edge_is_drawn() {
        let graph = UndirectedGraph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        let svg = SVG::default().export(&graph, "triangle").unwrap();

        assert!(svg.starts_with("<?xml"), "Output should be an XML document.");
        assert!(svg.contains("<title>triangle</title>"));
        assert_eq!(svg.matches("<circle").count(), 3, "One circle per node.");
        assert_eq!(svg.matches("<path").count(), 3, "One path per edge.");
        assert!(svg.contains(">2</text>"), "Nodes should be labelled with their id.");
    }

    #[test]
    fn first_node_sits_top_centre() {
        let svg = SVG::default();
        let positions = layout::circle(4);
        let scaler = PointScaler::from_point_iterator(positions.iter().copied());

        assert_eq!(
            svg.scaled_point(&positions[0], &scaler),
            Point { x: 340.0, y: 40.0 },
            "Node 0 should be at the top centre of the padded canvas."
        );
        assert_eq!(
            svg.scaled_point(&positions[2], &scaler),
            Point { x: 340.0, y: 640.0 },
            "Node 2 should be at the bottom centre of the padded canvas."
        );
    }

    #[test]
    fn name_is_escaped() {
        let svg = SVG::default()
            .export(&UndirectedGraph::with_order(1), "<ring & star>")
            .unwrap();

        assert!(svg.contains("&lt;ring &amp; star&gt;"));
    }

    #[test]
    fn self_loop_is_drawn_as_arc() {
        let graph = UndirectedGraph::from_edges(1, &[(0, 0)]).unwrap();
        let svg = SVG::default().export(&graph, "loop").unwrap();

        assert!(svg.contains(" a 12 12 0 1 1 0.01 0"), "A loop should be an arc.");
    }
}
