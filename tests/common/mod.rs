use lattica_core::lattice::Lattice;
use lattica_core::rule::Rule;

/// Builds small lattices with a known set of live cells.
#[allow(dead_code)]
pub struct LatticeBuilder {
    size: usize,
    alive: Vec<(usize, usize, usize)>,
}

#[allow(dead_code)]
impl LatticeBuilder {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            alive: Vec::new(),
        }
    }

    pub fn alive(mut self, x: usize, y: usize, z: usize) -> Self {
        self.alive.push((x, y, z));
        self
    }

    pub fn alive_all(mut self, cells: &[(usize, usize, usize)]) -> Self {
        self.alive.extend_from_slice(cells);
        self
    }

    pub fn build(self) -> Lattice {
        let mut lattice = Lattice::new(self.size).expect("test lattice size must be valid");
        for (x, y, z) in self.alive {
            lattice
                .set(x, y, z, true)
                .expect("test cell must be in range");
        }
        lattice
    }
}

/// Steps `lattice` forward by `steps` generations with the sequential rule
/// engine, as a reference for the scheduler's parallel passes.
#[allow(dead_code)]
pub fn evolve(lattice: &Lattice, rule: &Rule, steps: u64) -> Lattice {
    let mut current = lattice.clone();
    for _ in 0..steps {
        current = rule.step(&current);
    }
    current
}
