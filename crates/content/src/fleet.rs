/// One vehicle of the fleet showcase, titled via `fleet.items.<slug>`.
#[derive(Clone, Copy, Debug)]
pub struct Vehicle {
    pub id: u32,
    pub slug: &'static str,
    pub image: &'static str,
}

impl Vehicle {
    pub fn title_key(&self) -> String {
        format!("fleet.items.{}", self.slug)
    }
}

pub static FLEET: &[Vehicle] = &[
    Vehicle {
        id: 1,
        slug: "telescopic_crane",
        image: "/static/images/bleiner-vehicles-1.jpg",
    },
    Vehicle {
        id: 2,
        slug: "mobile_crane",
        image: "/static/images/bleiner-vehicles-2.jpg",
    },
    Vehicle {
        id: 3,
        slug: "hooklift",
        image: "/static/images/bleiner-vehicles-3.jpg",
    },
    Vehicle {
        id: 4,
        slug: "snow_plough",
        image: "/static/images/bleiner-vehicles-5.jpg",
    },
    Vehicle {
        id: 5,
        slug: "drive_tyres",
        image: "/static/images/bleiner-vehicles-6.jpg",
    },
    Vehicle {
        id: 6,
        slug: "fleet_lineup",
        image: "/static/images/bleiner-vehicles-7.jpg",
    },
    Vehicle {
        id: 7,
        slug: "chassis_service",
        image: "/static/images/bleiner-vehicles-8.jpg",
    },
    Vehicle {
        id: 8,
        slug: "bulldozer",
        image: "/static/images/bleiner-vehicles-9.jpg",
    },
    Vehicle {
        id: 9,
        slug: "low_loader",
        image: "/static/images/bleiner-transport-3.jpg",
    },
    Vehicle {
        id: 10,
        slug: "excavator_haulage",
        image: "/static/images/bleiner-transport-10.jpg",
    },
    Vehicle {
        id: 11,
        slug: "excavator_transport",
        image: "/static/images/bleiner-transport-11.jpg",
    },
    Vehicle {
        id: 12,
        slug: "flatbed",
        image: "/static/images/bleiner-transport-12.jpg",
    },
    Vehicle {
        id: 13,
        slug: "tipper",
        image: "/static/images/bleiner-transport-15.jpg",
    },
    Vehicle {
        id: 14,
        slug: "curtain_side",
        image: "/static/images/bleiner-transport-17.jpg",
    },
];
