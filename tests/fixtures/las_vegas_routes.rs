//! Routes through real Las Vegas / Henderson locations.

use polyline_codec::Coordinate;

/// A named stop on a route.
#[derive(Debug, Clone, Copy)]
pub struct Waypoint {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

impl Coordinate for Waypoint {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}

/// North to south along the Strip.
pub const STRIP_TOUR: &[Waypoint] = &[
    Waypoint::new("Encore at Wynn", 36.1289345, -115.1653620),
    Waypoint::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Waypoint::new("Morels French Steakhouse", 36.1249500, -115.1690442),
    Waypoint::new("Denny's Mid Strip", 36.1209774, -115.1717620),
    Waypoint::new("Caesars Palace", 36.1162, -115.1745),
    Waypoint::new("Bellagio", 36.1126, -115.1767),
    Waypoint::new("P.F. Chang's", 36.1103352, -115.1723830),
    Waypoint::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Waypoint::new("MGM Grand", 36.1023654, -115.1688720),
    Waypoint::new("TENDER Steak & Seafood", 36.0949700, -115.1761289),
    Waypoint::new("Bootlegger Bistro", 36.0492047, -115.1715744),
];

/// Henderson out to the east side and back toward the north.
pub const CROSS_TOWN: &[Waypoint] = &[
    Waypoint::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Waypoint::new("Naga", 36.0137634, -114.9928676),
    Waypoint::new("Islander's Grill", 36.0335058, -114.9856162),
    Waypoint::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Waypoint::new("Sunset Station Area", 36.0614, -115.0631),
    Waypoint::new("Pei Wei Town Square", 36.0810469, -115.1472694),
    Waypoint::new("Longhorn Casino", 36.1070664, -115.0591256),
    Waypoint::new("Hello Tokyo", 36.1161627, -115.0902096),
    Waypoint::new("Rivas Mexican Grill North", 36.1450055, -115.0482587),
    Waypoint::new("Beers and Bets", 36.1428945, -115.1573836),
];

/// Pairs of stops only a few grid steps apart.
pub const NEARBY_STOPS: &[Waypoint] = &[
    Waypoint::new("Marakesh", 36.1177772, -115.1546882),
    Waypoint::new("Musashi", 36.1177743, -115.1545417),
    Waypoint::new("The Local", 36.0861274, -115.1388524),
    Waypoint::new("Pei Wei East", 36.0861327, -115.1387345),
];

pub fn all_routes() -> Vec<&'static [Waypoint]> {
    vec![STRIP_TOUR, CROSS_TOWN, NEARBY_STOPS]
}
