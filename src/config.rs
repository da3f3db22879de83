use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 10;

/// Classic fleet: one battleship, two cruisers, three destroyers, four boats.
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
    ShipType::new("Destroyer", 2),
    ShipType::new("Destroyer", 2),
    ShipType::new("Patrol Boat", 1),
    ShipType::new("Patrol Boat", 1),
    ShipType::new("Patrol Boat", 1),
    ShipType::new("Patrol Boat", 1),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

const fn fleet_cells(fleet: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

/// Lengths of the fleet roster in placement order.
pub fn ship_lengths() -> [usize; NUM_SHIPS] {
    core::array::from_fn(|i| FLEET[i].length())
}
