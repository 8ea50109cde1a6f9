//! Adjacency and Laplacian matrices and their eigen-decompositions.
//!
//! Matrices are dense [`DMatrix`] in node-index order. Directed networks are
//! symmetrized (an edge `u -> v` adds its weight to both `A[u][v]` and
//! `A[v][u]`) so the symmetric eigen-solver applies and every eigenvalue is
//! real. Reciprocal edges `u -> v` and `v -> u` therefore sum, which keeps
//! each row sum equal to [`Network::degree`].

use nalgebra::{DMatrix, Dyn, SymmetricEigen};

use crate::graph::Network;

impl Network {
    /// Symmetric (weighted) adjacency matrix.
    #[must_use]
    pub fn adjacency_matrix(&self, weight: Option<&str>) -> DMatrix<f64> {
        let n = self.node_count();
        let mut adjacency = DMatrix::zeros(n, n);
        for (edge, (source, target)) in self.edges().enumerate() {
            let w = self.edge_attrs(edge).weight(weight);
            adjacency[(source, target)] += w;
            adjacency[(target, source)] += w;
        }
        adjacency
    }

    /// Laplacian `L = D - A` of the symmetric adjacency matrix.
    #[must_use]
    pub fn laplacian_matrix(&self, weight: Option<&str>) -> DMatrix<f64> {
        let adjacency = self.adjacency_matrix(weight);
        let n = adjacency.nrows();
        let mut laplacian = -adjacency;
        for i in 0..n {
            let degree: f64 = -laplacian.row(i).sum();
            laplacian[(i, i)] = degree;
        }
        laplacian
    }

    /// Full eigen-decomposition of the adjacency matrix. Eigenvectors are
    /// the columns of `eigenvectors`, paired with `eigenvalues` by position;
    /// the order is solver-defined.
    #[must_use]
    pub fn adjacency_eigen(&self, weight: Option<&str>) -> SymmetricEigen<f64, Dyn> {
        SymmetricEigen::new(self.adjacency_matrix(weight))
    }

    /// Laplacian eigenvalues in ascending order.
    #[must_use]
    pub fn laplacian_spectrum(&self, weight: Option<&str>) -> Vec<f64> {
        if self.node_count() == 0 {
            return Vec::new();
        }
        let eigen = SymmetricEigen::new(self.laplacian_matrix(weight));
        let mut eigenvalues: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
        eigenvalues.sort_by(f64::total_cmp);
        eigenvalues
    }
}
