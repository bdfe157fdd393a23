use truewind::{TrueWindInput, compute_true_wind};

fn main() {
    let input = TrueWindInput {
        apparent_wind_angle: 45.0, // degrees, positive to starboard
        apparent_wind_speed: 10.0,
        course_over_ground: 90.0,
        heading: 85.0,
        boat_speed: 6.5,
        speed_over_ground: 6.0,
        ..Default::default()
    };

    match compute_true_wind(input) {
        Ok(output) => {
            println!("tws {:.6}", output.true_wind_speed);
            println!("twa {:.6}", output.true_wind_angle);
        }
        Err(error) => eprintln!("{}", error),
    }
}
