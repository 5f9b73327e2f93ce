use crate::config::GridConfig;
use crate::geometry::Rect;
use cgmath::Vector2;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Block {
    pub position: Vector2<f32>,
    pub width: f32,
    pub height: f32,
    pub active: bool,
}

impl Block {
    pub fn rect(&self) -> Rect {
        Rect::at(self.position, self.width, self.height)
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Lays out the grid row by row, every block active.
pub fn create_blocks(grid: &GridConfig) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(grid.rows * grid.cols);

    for row_index in 0..grid.rows {
        for col_index in 0..grid.cols {
            blocks.push(Block {
                position: Vector2::new(
                    grid.pitch_x * col_index as f32 + grid.origin_x,
                    grid.pitch_y * row_index as f32 + grid.origin_y,
                ),
                width: grid.block_width,
                height: grid.block_height,
                active: true,
            });
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_layout() {
        let blocks = create_blocks(&GridConfig::default());

        assert_eq!(blocks.len(), 48);
        assert_eq!(blocks[0].position, Vector2::new(65.0, 35.0));
        assert_eq!(blocks[1].position, Vector2::new(129.0, 35.0));
        assert_eq!(blocks[8].position, Vector2::new(65.0, 59.0));
        assert_eq!(blocks[47].position, Vector2::new(513.0, 155.0));
        assert!(blocks.iter().all(|b| b.active));
        assert!(blocks.iter().all(|b| b.width == 60.0 && b.height == 20.0));
    }

    #[test]
    fn neighbouring_blocks_leave_a_gap() {
        let blocks = create_blocks(&GridConfig::default());
        assert_eq!(blocks[1].rect().left() - blocks[0].rect().right(), 4.0);
        assert_eq!(blocks[8].rect().top() - blocks[0].rect().bottom(), 4.0);
    }

    #[test]
    fn deactivated_block_stays_inactive() {
        let mut block = create_blocks(&GridConfig::default()).remove(0);
        block.deactivate();
        block.deactivate();
        assert!(!block.active);
    }
}
