//! Geometrie-Grundtypen für die Hover-Selektion.
//!
//! Envelopes, ein Query-Ring (Kreis-Approximation) und die Schnitt-Prädikate
//! der exakten Trefferprüfung.
//! Alle Prädikate sind inklusiv: Berührung am Rand zählt als Schnitt.

use glam::DVec2;

/// Achsen-alignierte Bounding-Box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min: DVec2,
    pub max: DVec2,
}

impl Envelope {
    /// Erstellt eine Envelope aus zwei beliebigen Eckpunkten.
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Leere Envelope, schneidet nichts.
    pub fn empty() -> Self {
        Self {
            min: DVec2::splat(f64::INFINITY),
            max: DVec2::splat(f64::NEG_INFINITY),
        }
    }

    /// Minimale Envelope um alle Punkte (leer bei leerer Eingabe).
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a DVec2>) -> Self {
        points.into_iter().fold(Self::empty(), |mut env, p| {
            env.min = env.min.min(*p);
            env.max = env.max.max(*p);
            env
        })
    }

    /// Gibt `true` zurück, wenn die Envelope keinen Punkt enthält.
    pub fn is_empty(&self) -> bool {
        !(self.min.x <= self.max.x && self.min.y <= self.max.y)
    }

    /// Inklusiver Schnitttest zweier Envelopes.
    pub fn intersects(&self, other: &Envelope) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Halbe Diagonale = Radius des umschließenden Kreises.
    pub fn half_diagonal(&self) -> f64 {
        (self.max - self.min).length() * 0.5
    }
}

/// Geschlossener Ring (letzter Punkt wird implizit mit dem ersten verbunden)
/// samt vorberechneter Envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRing {
    points: Vec<DVec2>,
    envelope: Envelope,
}

impl QueryRing {
    /// Baut einen Ring aus den übergebenen Stützpunkten.
    pub fn from_points(points: Vec<DVec2>) -> Self {
        let envelope = Envelope::from_points(&points);
        Self { points, envelope }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Iteriert über alle Kanten inklusive der schließenden Kante.
    fn edges(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        ring_edges(&self.points)
    }

    /// Prüft, ob ein Punkt im Ring oder auf dessen Rand liegt.
    pub fn contains_point(&self, point: DVec2) -> bool {
        self.envelope.intersects(&Envelope::new(point, point)) && point_in_ring(point, &self.points)
    }
}

/// Kreisförmige Query-Geometrie im Karten-KBS.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryGeometry {
    /// Erzeugende Position (Kartenkoordinaten)
    pub center: DVec2,
    /// Erzeugender Radius (Karteneinheiten)
    pub radius: f64,
    /// Polygon-Approximation des Kreises
    pub ring: QueryRing,
}

impl QueryGeometry {
    /// Approximiert einen Kreis durch ein regelmäßiges Polygon mit `segments` Ecken.
    pub fn circle(center: DVec2, radius: f64, segments: usize) -> Self {
        let segments = segments.max(3);
        let step = std::f64::consts::TAU / segments as f64;
        let points = (0..segments)
            .map(|i| {
                let angle = step * i as f64;
                center + DVec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();

        Self {
            center,
            radius,
            ring: QueryRing::from_points(points),
        }
    }
}

/// Exakte Geometrie eines Features.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureGeometry {
    Point(DVec2),
    LineString(Vec<DVec2>),
    Polygon {
        exterior: Vec<DVec2>,
        interiors: Vec<Vec<DVec2>>,
    },
}

impl FeatureGeometry {
    /// Polygon ohne Löcher.
    pub fn polygon(exterior: Vec<DVec2>) -> Self {
        Self::Polygon {
            exterior,
            interiors: Vec::new(),
        }
    }

    /// Minimale Bounding-Box der Geometrie.
    pub fn envelope(&self) -> Envelope {
        match self {
            Self::Point(p) => Envelope::new(*p, *p),
            Self::LineString(points) => Envelope::from_points(points),
            Self::Polygon { exterior, .. } => Envelope::from_points(exterior),
        }
    }

    /// Exakter, inklusiver Schnitttest gegen einen Query-Ring.
    pub fn intersects(&self, ring: &QueryRing) -> bool {
        if !self.envelope().intersects(ring.envelope()) {
            return false;
        }

        match self {
            Self::Point(p) => ring.contains_point(*p),
            Self::LineString(points) => {
                if points.iter().any(|p| ring.contains_point(*p)) {
                    return true;
                }
                points
                    .windows(2)
                    .any(|seg| ring.edges().any(|(c, d)| segments_intersect(seg[0], seg[1], c, d)))
            }
            Self::Polygon {
                exterior,
                interiors,
            } => {
                let boundary_touch = std::iter::once(exterior)
                    .chain(interiors.iter())
                    .flat_map(|r| ring_edges(r))
                    .any(|(a, b)| ring.edges().any(|(c, d)| segments_intersect(a, b, c, d)));
                if boundary_touch {
                    return true;
                }

                // Ohne Randkontakt liegt entweder das Feature im Ring,
                // der Ring im Feature oder beide disjunkt.
                if exterior.iter().any(|p| ring.contains_point(*p)) {
                    return true;
                }
                let Some(&ring_vertex) = ring.points().first() else {
                    return false;
                };
                point_in_ring(ring_vertex, exterior)
                    && !interiors.iter().any(|hole| point_in_ring(ring_vertex, hole))
            }
        }
    }
}

fn ring_edges(points: &[DVec2]) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
    let closing = match (points.last(), points.first()) {
        (Some(&last), Some(&first)) if points.len() > 1 => Some((last, first)),
        _ => None,
    };
    points
        .windows(2)
        .map(|w| (w[0], w[1]))
        .chain(closing)
}

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
fn point_on_segment(point: DVec2, a: DVec2, b: DVec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    let tolerance = 1e-9 * ab.length_squared().max(1.0);
    if ab.perp_dot(ap).abs() > tolerance {
        return false;
    }

    let dot = ap.dot(ab);
    dot >= 0.0 && dot <= ab.length_squared()
}

/// Prüft ob ein Punkt innerhalb eines Rings liegt (Ray-Casting, Rand inklusive).
fn point_in_ring(point: DVec2, ring: &[DVec2]) -> bool {
    match ring.len() {
        0 => return false,
        1 => return ring[0] == point,
        2 => return point_on_segment(point, ring[0], ring[1]),
        _ => {}
    }

    let mut inside = false;
    for (previous, current) in ring_edges(ring) {
        if point_on_segment(point, previous, current) {
            return true;
        }

        let crosses = ((current.y > point.y) != (previous.y > point.y))
            && (point.x
                < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x);
        if crosses {
            inside = !inside;
        }
    }

    inside
}

/// Inklusiver Schnitttest zweier Strecken (Orientierungstest).
fn segments_intersect(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> bool {
    let d1 = (b - a).perp_dot(c - a);
    let d2 = (b - a).perp_dot(d - a);
    let d3 = (d - c).perp_dot(a - c);
    let d4 = (d - c).perp_dot(b - c);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    point_on_segment(c, a, b)
        || point_on_segment(d, a, b)
        || point_on_segment(a, c, d)
        || point_on_segment(b, c, d)
}
