use rand::{rngs::StdRng, Rng, SeedableRng};
use spmat::{par_multiply, Axis, SparseGraph, SparseMatrix, SpmatError};

fn numbered(nrows: usize, ncols: usize) -> SparseMatrix<i64> {
    let mut m = SparseMatrix::new(nrows, ncols);
    for i in 0..nrows {
        for j in 0..ncols {
            m.set(i, j, (i * ncols + j + 1) as i64).unwrap();
        }
    }
    m
}

#[test]
fn matrix_basic() {
    let size = 100;
    let mat1 = numbered(size, size);
    let mat2 = numbered(size, size);
    let mat3 = SparseMatrix::<i64>::new(size, size);

    assert_eq!(mat1[(0, 1)], 2);
    assert_eq!(mat1[(1, 1)], (size + 2) as i64);
    assert_eq!(mat1[(1, size - 1)], (size * 2) as i64);
    assert_eq!(mat1[(size - 1, size - 1)], (size * size) as i64);

    assert_eq!(mat1, mat2);
    assert_ne!(mat1, mat3);
    assert!(!std::ptr::eq(&mat1, &mat2));

    // Equal values, independent storage
    let mut mat2 = mat2;
    mat2.set(0, 0, -1).unwrap();
    assert_eq!(mat1[(0, 0)], 1);
    assert_ne!(mat1, mat2);
}

#[test]
fn graph_basic() {
    let size = 100;
    let mut gra1 = SparseGraph::<i64>::new(size);
    let mut gra2 = SparseGraph::<i64>::new(size);
    let gra3 = SparseGraph::<i64>::new(size);
    for i in 0..size {
        for j in 0..size {
            gra1[(i, j)] = (i * size + j + 1) as i64;
            gra2.set(i, j, (i * size + j + 1) as i64).unwrap();
        }
    }

    assert_eq!(gra1.dim(), size);
    assert_eq!(gra1[(size - 1, size - 1)], (size * size) as i64);
    assert_eq!(gra1, gra2);
    assert_ne!(gra1, gra3);
}

#[test]
fn expand_shrink_row_and_col() {
    let size = 10;
    let mut mat = numbered(size, size);

    mat.shrink_row().unwrap();
    mat.shrink_col().unwrap();
    assert_eq!(mat.shape(), (size - 1, size - 1));
    for i in 0..size - 1 {
        for j in 0..size - 1 {
            assert_ne!(mat[(i, j)], 0);
        }
    }

    mat.expand_row();
    mat.expand_col();
    assert_eq!(mat.shape(), (size, size));
    assert_eq!(mat[(size - 1, size - 1)], 0);
    assert_eq!(mat[(0, size - 1)], 0);
    assert_eq!(mat[(size - 1, 0)], 0);
}

#[test]
fn shrink_to_empty_then_fail() {
    let mut mat = SparseMatrix::<f32>::new(1, 1);
    mat.set(0, 0, 1.0).unwrap();
    mat.shrink_row().unwrap();
    assert_eq!(mat.nnz(), 0);
    assert_eq!(mat.shrink_row(), Err(SpmatError::EmptyDimension(Axis::Row)));
    assert_eq!(mat.shape(), (0, 1));
}

#[test]
fn parallel_matches_sequential_on_random_operands() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..5 {
        let (m, k, n) = (
            rng.gen_range(1..40),
            rng.gen_range(1..40),
            rng.gen_range(1..40),
        );
        let mut a = SparseMatrix::<i64>::new(m, k);
        let mut b = SparseMatrix::<i64>::new(k, n);
        for _ in 0..(m * k) / 4 {
            a.set(
                rng.gen_range(0..m),
                rng.gen_range(0..k),
                rng.gen_range(-9..10),
            )
            .unwrap();
        }
        for _ in 0..(k * n) / 4 {
            b.set(
                rng.gen_range(0..k),
                rng.gen_range(0..n),
                rng.gen_range(-9..10),
            )
            .unwrap();
        }

        let seq = &a * &b;
        let par = par_multiply(&a, &b).unwrap();
        assert_eq!(par, seq);
        assert_eq!(par.shape(), (m, n));
    }
}

#[test]
fn graph_product_counts_paths() {
    // Cycle 0 -> 1 -> 2 -> 0 plus a chord 0 -> 2
    let mut g = SparseGraph::<u32>::new(3);
    g.set(0, 1, 1).unwrap();
    g.set(1, 2, 1).unwrap();
    g.set(2, 0, 1).unwrap();
    g.set(0, 2, 1).unwrap();

    let two = g.multiply(&g).unwrap();
    assert_eq!(two.get(0, 2).unwrap(), 1);
    assert_eq!(two.get(0, 0).unwrap(), 1);
    assert_eq!(two.get(1, 0).unwrap(), 1);
    assert_eq!(two.get(2, 1).unwrap(), 1);
    assert_eq!(two.get(2, 2).unwrap(), 1);
    assert_eq!(two.nnz(), 5);
}
