//! Map drawn on a ratatui braille canvas with the built-in world outline.

use super::{GeoPoint, MapCapability, MapHandle, MarkerHandle, MarkerSpec, MarkerStyle};
use crate::config::MapDetail;
use crate::tui::Message;
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution},
        Block,
    },
    Frame,
};
use std::cell::Cell;

pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 18;

const MARKER_ICON: &str = "●";
const FOCUSED_ICON: &str = "◉";

/// Visible window of the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: u8,
}

impl Viewport {
    /// Longitude span in degrees; halves with every zoom step.
    pub fn lon_span(&self) -> f64 {
        (720.0 / f64::from(1u32 << self.zoom)).min(360.0)
    }

    /// Latitude span: terminal cells are about twice as tall as wide.
    pub fn lat_span(&self) -> f64 {
        (self.lon_span() / 2.0).min(180.0)
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lon_span() / 2.0;
        [self.center.lon - half, self.center.lon + half]
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span() / 2.0;
        [self.center.lat - half, self.center.lat + half]
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        let [x0, x1] = self.x_bounds();
        let [y0, y1] = self.y_bounds();
        (x0..=x1).contains(&point.lon) && (y0..=y1).contains(&point.lat)
    }

    /// Terminal cell of `point` inside `area`, if it is visible.
    ///
    /// Uses the same arithmetic as the canvas label placement, so the cell
    /// is the one the marker glyph is printed in.
    pub fn project(&self, point: GeoPoint, area: Rect) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 || !self.contains(point) {
            return None;
        }
        let [left, right] = self.x_bounds();
        let [bottom, top] = self.y_bounds();
        let col = ((point.lon - left) * f64::from(area.width - 1) / (right - left)) as u16;
        let row = ((top - point.lat) * f64::from(area.height - 1) / (top - bottom)) as u16;
        Some((area.x + col.min(area.width - 1), area.y + row.min(area.height - 1)))
    }
}

struct PlacedMarker {
    spec: MarkerSpec,
    on_click: Option<Message>,
}

/// Terminal implementation of [`MapCapability`].
pub struct TerminalMap {
    detail: MapDetail,
    viewport: Option<Viewport>,
    markers: Vec<PlacedMarker>,
    /// Inner area of the last draw, for mouse hit-testing
    last_area: Cell<Rect>,
}

impl TerminalMap {
    pub fn new(detail: MapDetail) -> Self {
        Self {
            detail,
            viewport: None,
            markers: Vec::new(),
            last_area: Cell::new(Rect::default()),
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn marker(&self, marker: MarkerHandle) -> Option<&MarkerSpec> {
        self.markers.get(marker.0).map(|m| &m.spec)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Marker drawn at (or right next to) a terminal cell from the last draw.
    pub fn marker_at(&self, column: u16, row: u16) -> Option<MarkerHandle> {
        let viewport = self.viewport?;
        let area = self.last_area.get();

        self.markers
            .iter()
            .enumerate()
            .filter_map(|(idx, m)| {
                let (x, y) = viewport.project(m.spec.coords, area)?;
                let dx = x.abs_diff(column);
                let dy = y.abs_diff(row);
                (dx <= 1 && dy == 0).then_some((idx, dx))
            })
            .min_by_key(|(_, dx)| *dx)
            .map(|(idx, _)| MarkerHandle(idx))
    }

    /// Draw the map and its markers into `area`.
    pub fn draw(&self, f: &mut Frame, area: Rect, block: Block, focused: Option<MarkerHandle>) {
        let inner = block.inner(area);
        self.last_area.set(inner);

        let Some(viewport) = self.viewport else {
            f.render_widget(block, area);
            return;
        };

        let resolution = match self.detail {
            MapDetail::Low => MapResolution::Low,
            MapDetail::High => MapResolution::High,
        };

        let canvas = Canvas::default()
            .block(block)
            .marker(symbols::Marker::Braille)
            .x_bounds(viewport.x_bounds())
            .y_bounds(viewport.y_bounds())
            .paint(|ctx| {
                ctx.draw(&Map {
                    color: Color::DarkGray,
                    resolution,
                });
                ctx.layer();

                for (idx, placed) in self.markers.iter().enumerate() {
                    let spec = &placed.spec;
                    if Some(MarkerHandle(idx)) == focused {
                        continue;
                    }
                    ctx.print(
                        spec.coords.lon,
                        spec.coords.lat,
                        Span::styled(MARKER_ICON, marker_style(spec.style)),
                    );
                }

                // Focused marker last so its label sits on top
                if let Some(spec) = focused.and_then(|h| self.marker(h)) {
                    ctx.print(
                        spec.coords.lon,
                        spec.coords.lat,
                        Line::from(vec![
                            Span::styled(
                                FOCUSED_ICON,
                                marker_style(spec.style).add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(
                                format!(" {}", spec.hint),
                                Style::default()
                                    .fg(Color::Black)
                                    .bg(Color::Yellow)
                                    .add_modifier(Modifier::BOLD),
                            ),
                        ]),
                    );
                }
            });

        f.render_widget(canvas, area);
    }
}

pub fn marker_style(style: MarkerStyle) -> Style {
    match style {
        MarkerStyle::Active => Style::default().fg(Color::Green),
        MarkerStyle::Inactive => Style::default().fg(Color::DarkGray),
    }
}

impl MapCapability for TerminalMap {
    fn create_map(&mut self, center: GeoPoint, zoom: u8) -> Result<MapHandle> {
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
            anyhow::bail!("zoom {} is outside {}..={}", zoom, MIN_ZOOM, MAX_ZOOM);
        }
        if !(-90.0..=90.0).contains(&center.lat) || !(-180.0..=180.0).contains(&center.lon) {
            anyhow::bail!("center ({}, {}) is not a valid position", center.lat, center.lon);
        }

        self.viewport = Some(Viewport { center, zoom });
        self.markers.clear();
        Ok(MapHandle(0))
    }

    fn add_marker(&mut self, map: MapHandle, marker: MarkerSpec) -> Result<MarkerHandle> {
        if self.viewport.is_none() || map != MapHandle(0) {
            anyhow::bail!("marker added to unknown map {:?}", map);
        }
        self.markers.push(PlacedMarker {
            spec: marker,
            on_click: None,
        });
        Ok(MarkerHandle(self.markers.len() - 1))
    }

    fn on_marker_click(&mut self, marker: MarkerHandle, on_click: Message) {
        if let Some(placed) = self.markers.get_mut(marker.0) {
            placed.on_click = Some(on_click);
        }
    }

    fn set_marker_style(&mut self, marker: MarkerHandle, style: MarkerStyle) {
        if let Some(placed) = self.markers.get_mut(marker.0) {
            placed.spec.style = style;
        }
    }

    fn click(&self, marker: MarkerHandle) -> Option<Message> {
        self.markers.get(marker.0)?.on_click.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PlantId;
    use crate::map::MarkerPopup;

    fn spec(lat: f64, lon: f64) -> MarkerSpec {
        MarkerSpec {
            coords: GeoPoint::new(lat, lon),
            popup: MarkerPopup::default(),
            hint: "plant".to_string(),
            style: MarkerStyle::Active,
        }
    }

    #[test]
    fn test_create_map_rejects_bad_zoom() {
        let mut map = TerminalMap::new(MapDetail::Low);
        assert!(map.create_map(GeoPoint::new(55.0, 37.0), 0).is_err());
        assert!(map.create_map(GeoPoint::new(55.0, 37.0), 30).is_err());
        assert!(map.viewport().is_none());
    }

    #[test]
    fn test_create_map_rejects_bad_center() {
        let mut map = TerminalMap::new(MapDetail::Low);
        assert!(map.create_map(GeoPoint::new(95.0, 37.0), 4).is_err());
    }

    #[test]
    fn test_add_marker_requires_map() {
        let mut map = TerminalMap::new(MapDetail::Low);
        assert!(map.add_marker(MapHandle(0), spec(50.0, 40.0)).is_err());
    }

    #[test]
    fn test_click_returns_registered_message() {
        let mut map = TerminalMap::new(MapDetail::Low);
        let handle = map.create_map(GeoPoint::new(55.0, 37.0), 4).unwrap();
        let marker = map.add_marker(handle, spec(50.0, 40.0)).unwrap();
        assert_eq!(map.marker_count(), 1);
        assert_eq!(map.click(marker), None);

        map.on_marker_click(marker, Message::PlantMarkerActivated(PlantId(3)));
        assert_eq!(
            map.click(marker),
            Some(Message::PlantMarkerActivated(PlantId(3)))
        );
    }

    #[test]
    fn test_set_marker_style() {
        let mut map = TerminalMap::new(MapDetail::Low);
        let handle = map.create_map(GeoPoint::new(55.0, 37.0), 4).unwrap();
        let marker = map.add_marker(handle, spec(50.0, 40.0)).unwrap();
        map.set_marker_style(marker, MarkerStyle::Inactive);
        assert_eq!(map.marker(marker).unwrap().style, MarkerStyle::Inactive);
    }

    #[test]
    fn test_viewport_projection() {
        let viewport = Viewport {
            center: GeoPoint::new(50.0, 40.0),
            zoom: 4,
        };
        let area = Rect::new(10, 5, 40, 20);

        // Center lands in the middle of the area
        assert_eq!(viewport.project(viewport.center, area), Some((29, 14)));
        // Corners map onto the first and last cells
        assert_eq!(viewport.project(GeoPoint::new(61.25, 17.5), area), Some((10, 5)));
        assert_eq!(viewport.project(GeoPoint::new(38.75, 62.5), area), Some((49, 24)));
        // Far away points are not visible
        assert_eq!(viewport.project(GeoPoint::new(-30.0, 150.0), area), None);
    }

    #[test]
    fn test_marker_at_uses_last_draw_area() {
        let mut map = TerminalMap::new(MapDetail::Low);
        let handle = map.create_map(GeoPoint::new(50.0, 40.0), 4).unwrap();
        let marker = map.add_marker(handle, spec(50.0, 40.0)).unwrap();
        map.last_area.set(Rect::new(10, 5, 40, 20));

        assert_eq!(map.marker_at(29, 14), Some(marker));
        assert_eq!(map.marker_at(30, 14), Some(marker));
        assert_eq!(map.marker_at(29, 15), None);
    }

    fn glyph_cell(buffer: &ratatui::buffer::Buffer, symbol: &str) -> Option<(u16, u16)> {
        let width = buffer.area.width;
        buffer
            .content()
            .iter()
            .position(|cell| cell.symbol() == symbol)
            .map(|idx| (idx as u16 % width, idx as u16 / width))
    }

    #[test]
    fn test_marker_at_hits_drawn_glyph() {
        use ratatui::{backend::TestBackend, widgets::Borders, Terminal};

        let mut map = TerminalMap::new(MapDetail::Low);
        let handle = map.create_map(GeoPoint::new(50.0, 40.0), 4).unwrap();
        let marker = map.add_marker(handle, spec(50.0, 40.0)).unwrap();
        let other = map.add_marker(handle, spec(47.3, 45.1)).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(42, 22)).unwrap();
        terminal
            .draw(|f| map.draw(f, f.area(), Block::default().borders(Borders::ALL), Some(other)))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let (x, y) = glyph_cell(buffer, MARKER_ICON).expect("marker glyph drawn");
        assert_eq!(map.marker_at(x, y), Some(marker));

        let (x, y) = glyph_cell(buffer, FOCUSED_ICON).expect("focused glyph drawn");
        assert_eq!(map.marker_at(x, y), Some(other));
    }
}
