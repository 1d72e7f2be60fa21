//! K-means clustering over RGB points
//!
//! Plain Lloyd iteration in RGB space:
//! - Centroids seeded from a uniform sample of the input, without replacement
//! - Points assigned to the nearest centroid by Euclidean distance
//! - Centroids moved to the mean of their points
//! - Stops when a pass leaves every centroid exactly where it was
//!
//! The random source is injectable so callers can pin results with a seed.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::constants::clustering::DEFAULT_MAX_ITERATIONS;
use crate::{EmotionError, Result};

/// A point in RGB space, channels normalized to `[0, 1]`
pub type Point = [f64; 3];

/// K-means clusterer with a fixed cluster count and iteration budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KMeansClusterer {
    k: usize,
    max_iterations: usize,
    seed: Option<u64>,
}

impl KMeansClusterer {
    /// Create a clusterer producing `k` centroids with the default iteration budget
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Pin centroid initialization to a seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a seed if one is given, entropy otherwise
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Cluster `points` into exactly `k` centroids
    ///
    /// # Errors
    ///
    /// Returns `EmotionError::InsufficientData` if there are fewer points
    /// than clusters, and `EmotionError::InvalidParameter` if `k` or the
    /// iteration budget is zero.
    pub fn cluster(&self, points: &[Point]) -> Result<Vec<Point>> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.cluster_with_rng(points, &mut rng)
    }

    /// Cluster `points`, drawing the initial centroids from `rng`
    pub fn cluster_with_rng<R: Rng + ?Sized>(
        &self,
        points: &[Point],
        rng: &mut R,
    ) -> Result<Vec<Point>> {
        self.validate(points.len())?;

        let initial: Vec<Point> = index::sample(rng, points.len(), self.k)
            .iter()
            .map(|i| points[i])
            .collect();

        self.cluster_from(points, initial)
    }

    /// Run the refinement passes starting from explicit centroids
    ///
    /// The returned centroids keep the order of `initial`.
    pub fn cluster_from(&self, points: &[Point], initial: Vec<Point>) -> Result<Vec<Point>> {
        self.validate(points.len())?;
        if initial.len() != self.k {
            return Err(EmotionError::invalid_parameter(
                "initial_centroids",
                format!("{} centroids for k = {}", initial.len(), self.k),
            ));
        }

        let mut centroids = initial;
        let mut assignments = vec![0usize; points.len()];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            for (slot, point) in assignments.iter_mut().zip(points) {
                *slot = nearest_centroid(point, &centroids);
            }

            let updated = recompute_centroids(points, &assignments, &centroids);
            if updated == centroids {
                converged = true;
                break;
            }
            centroids = updated;
        }

        debug!(
            k = self.k,
            points = points.len(),
            iterations,
            converged,
            "k-means finished"
        );

        Ok(centroids)
    }

    fn validate(&self, point_count: usize) -> Result<()> {
        if self.k == 0 {
            return Err(EmotionError::invalid_parameter("k", self.k));
        }
        if self.max_iterations == 0 {
            return Err(EmotionError::invalid_parameter(
                "max_iterations",
                self.max_iterations,
            ));
        }
        if point_count < self.k {
            return Err(EmotionError::InsufficientData {
                points: point_count,
                clusters: self.k,
            });
        }
        Ok(())
    }
}

/// Cluster `points` into `k` centroids with an unseeded clusterer
pub fn cluster(points: &[Point], k: usize, max_iterations: usize) -> Result<Vec<Point>> {
    KMeansClusterer::new(k)
        .with_max_iterations(max_iterations)
        .cluster(points)
}

/// Euclidean distance between two RGB points
#[inline]
pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Index of the closest centroid; the first one wins ties
fn nearest_centroid(point: &Point, centroids: &[Point]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let distance = euclidean_distance(point, centroid);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

/// Mean of the points assigned to each centroid; empty clusters stay put
fn recompute_centroids(points: &[Point], assignments: &[usize], previous: &[Point]) -> Vec<Point> {
    let mut sums = vec![[0.0f64; 3]; previous.len()];
    let mut counts = vec![0usize; previous.len()];

    for (point, &cluster) in points.iter().zip(assignments) {
        for (sum, &channel) in sums[cluster].iter_mut().zip(point) {
            *sum += channel;
        }
        counts[cluster] += 1;
    }

    sums.iter()
        .zip(&counts)
        .zip(previous)
        .map(|((sum, &count), old)| {
            if count == 0 {
                *old
            } else {
                let n = count as f64;
                [sum[0] / n, sum[1] / n, sum[2] / n]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_close(actual: Point, expected: Point) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected);
        }
    }

    fn gradient_points() -> Vec<Point> {
        (0..50)
            .map(|i| {
                let t = i as f64 / 49.0;
                [t, 1.0 - t, (t * 3.0).fract()]
            })
            .collect()
    }

    #[test]
    fn test_insufficient_data() {
        let points = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
        let result = KMeansClusterer::new(3).cluster(&points);
        match result {
            Err(EmotionError::InsufficientData { points, clusters }) => {
                assert_eq!(points, 2);
                assert_eq!(clusters, 3);
            }
            other => panic!("Expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_clusters_rejected() {
        let points = gradient_points();
        assert!(matches!(
            KMeansClusterer::new(0).cluster(&points),
            Err(EmotionError::InvalidParameter { .. })
        ));
        assert!(matches!(
            KMeansClusterer::new(2).with_max_iterations(0).cluster(&points),
            Err(EmotionError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_returns_exactly_k_centroids() {
        let points = gradient_points();
        for k in 1..=6 {
            let centroids = KMeansClusterer::new(k).cluster(&points).unwrap();
            assert_eq!(centroids.len(), k);
        }
    }

    #[test]
    fn test_k_equals_point_count() {
        let points = vec![[0.1, 0.2, 0.3], [0.9, 0.8, 0.7]];
        let centroids = KMeansClusterer::new(2).with_seed(7).cluster(&points).unwrap();
        assert_eq!(centroids.len(), 2);
        assert!(centroids.contains(&points[0]));
        assert!(centroids.contains(&points[1]));
    }

    #[test]
    fn test_single_cluster_is_mean() {
        let points = gradient_points();
        let n = points.len() as f64;
        let mean = [
            points.iter().map(|p| p[0]).sum::<f64>() / n,
            points.iter().map(|p| p[1]).sum::<f64>() / n,
            points.iter().map(|p| p[2]).sum::<f64>() / n,
        ];

        for max_iterations in [1, 2, 10] {
            let centroids = KMeansClusterer::new(1)
                .with_max_iterations(max_iterations)
                .cluster(&points)
                .unwrap();
            assert_eq!(centroids.len(), 1);
            assert_point_close(centroids[0], mean);
        }
    }

    #[test]
    fn test_uniform_input_duplicates_centroids() {
        let points = vec![[0.0, 0.0, 0.0]; 20];
        let centroids = KMeansClusterer::new(3).cluster(&points).unwrap();
        assert_eq!(centroids, vec![[0.0, 0.0, 0.0]; 3]);
    }

    #[test]
    fn test_empty_cluster_keeps_previous_value() {
        let points = vec![[0.0, 0.0, 0.0], [0.1, 0.0, 0.0]];
        let centroids = KMeansClusterer::new(2)
            .cluster_from(&points, vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]])
            .unwrap();
        assert_point_close(centroids[0], [0.05, 0.0, 0.0]);
        assert_eq!(centroids[1], [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // Blue is equidistant from both red centroids and from green
        let points = vec![[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let centroids = KMeansClusterer::new(2)
            .with_max_iterations(1)
            .cluster_from(&points, vec![[1.0, 0.0, 0.0], [1.0, 0.0, 0.0]])
            .unwrap();
        assert_point_close(centroids[0], [0.5, 0.0, 0.5]);
        assert_eq!(centroids[1], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_converges_to_group_means() {
        let mut points = Vec::new();
        for i in 0..10 {
            let jitter = i as f64 * 0.01;
            points.push([0.1 + jitter, 0.1, 0.1]);
            points.push([0.9 - jitter, 0.9, 0.9]);
        }

        let centroids = KMeansClusterer::new(2)
            .cluster_from(&points, vec![points[0], points[1]])
            .unwrap();
        assert_point_close(centroids[0], [0.145, 0.1, 0.1]);
        assert_point_close(centroids[1], [0.855, 0.9, 0.9]);
    }

    #[test]
    fn test_initial_centroid_count_checked() {
        let points = gradient_points();
        let result = KMeansClusterer::new(3).cluster_from(&points, vec![points[0]]);
        assert!(matches!(result, Err(EmotionError::InvalidParameter { .. })));
    }

    #[test]
    fn test_seed_pins_result() {
        let points = gradient_points();
        let clusterer = KMeansClusterer::new(4).with_seed(42);
        let first = clusterer.cluster(&points).unwrap();
        let second = clusterer.cluster(&points).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cluster_with_rng_uses_given_source() {
        let points = gradient_points();
        let clusterer = KMeansClusterer::new(3);
        let a = clusterer
            .cluster_with_rng(&points, &mut StdRng::seed_from_u64(9))
            .unwrap();
        let b = clusterer
            .cluster_with_rng(&points, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_euclidean_distance() {
        assert_eq!(euclidean_distance(&[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]), 0.0);
        let d = euclidean_distance(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
        assert!((d - 2.0f64.sqrt()).abs() < 1e-6);
    }
}
