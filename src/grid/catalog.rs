//! Dense cell catalog built from a sparse district template
//!
//! After construction every in-bounds position resolves to exactly one cell,
//! and the grid is never mutated again.

use ahash::AHashMap;

use crate::core::types::GridPos;
use crate::grid::cell::GridCell;
use crate::grid::template::DistrictGrid;

/// The delivery grid for one district visit
#[derive(Debug, Clone)]
pub struct Grid {
    cells: AHashMap<GridPos, GridCell>,
    width: u32,
    height: u32,
    template_id: String,
    name: String,
}

impl Grid {
    /// Build the dense grid: authored cells first, then street backfill
    pub fn from_template(template: &DistrictGrid) -> Self {
        let width = template.size.width;
        let height = template.size.height;
        let mut cells = AHashMap::with_capacity((width as usize) * (height as usize));

        let in_bounds = |pos: GridPos| {
            pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < width && (pos.y as u32) < height
        };

        for cell in &template.default_cells {
            if !in_bounds(cell.position) {
                tracing::warn!(
                    "Template {}: skipping authored cell {} outside {}x{}",
                    template.id,
                    cell.position,
                    width,
                    height
                );
                continue;
            }
            if cells.insert(cell.position, cell.clone()).is_some() {
                tracing::warn!(
                    "Template {}: cell {} authored twice, keeping the later one",
                    template.id,
                    cell.position
                );
            }
        }

        let authored = cells.len();
        let base_chance = template.difficulty_modifiers.base_encounter_chance;
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let pos = GridPos::new(x, y);
                cells
                    .entry(pos)
                    .or_insert_with(|| GridCell::street(pos, base_chance, &template.id));
            }
        }

        tracing::debug!(
            "Built grid {} ({}x{}): {} authored, {} backfilled",
            template.id,
            width,
            height,
            authored,
            cells.len() - authored
        );

        Self {
            cells,
            width,
            height,
            template_id: template.id.clone(),
            name: template.name.clone(),
        }
    }

    /// Cell at a position; `None` only outside the loaded bounds
    pub fn get_cell_at(&self, pos: GridPos) -> Option<&GridCell> {
        self.cells.get(&pos)
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.values()
    }
}
