// Blueprint renderer - one schematic SVG panel per floor
use crate::application::html::escape_attr;
use crate::domain::estimate::{Floor, Room};
use std::fmt::Write;

const ROOM_FILL_OPACITY: f64 = 0.3;

/// Render every floor, in order. Room geometry is passed through unchecked.
pub fn render_blueprint(floors: &[Floor]) -> String {
    floors.iter().map(render_floor).collect()
}

pub fn render_floor(floor: &Floor) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"floor-plan-card\">");
    let _ = write!(
        out,
        "<h4 style=\"color:#94a3b8; margin-bottom:10px;\">{}</h4>",
        escape_attr(&floor.floor_name)
    );
    // 100x100 floor square with a 5-unit margin on every side
    out.push_str("<svg viewBox=\"-5 -5 110 110\" class=\"blueprint-svg\">");
    out.push_str(
        "<rect width=\"100%\" height=\"100%\" fill=\"#111827\" stroke=\"#374151\" stroke-width=\"0.5\"/>",
    );
    for room in &floor.rooms {
        render_room(room, &mut out);
    }
    out.push_str("</svg></div>");
    out
}

fn render_room(room: &Room, out: &mut String) {
    let color = escape_attr(&room.color);
    let (cx, cy) = room.center();
    let _ = write!(
        out,
        "<rect class=\"room\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{color}\" \
         fill-opacity=\"{ROOM_FILL_OPACITY}\" stroke=\"{color}\" stroke-width=\"0.5\"/>",
        room.x, room.y, room.w, room.h
    );
    let _ = write!(
        out,
        "<text x=\"{cx}\" y=\"{cy}\" text-anchor=\"middle\" fill=\"white\" font-size=\"3\">{}</text>",
        escape_attr(&room.name)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::estimate::fixtures::{room, sample_estimate};

    #[test]
    fn test_one_room_element_per_room_and_every_floor_kept() {
        let floors = sample_estimate().blueprint;
        let markup = render_blueprint(&floors);

        assert_eq!(markup.matches("class=\"floor-plan-card\"").count(), 2);
        assert_eq!(markup.matches("<rect class=\"room\"").count(), 2);
        assert_eq!(markup.matches("<text ").count(), 2);
        assert!(markup.contains(">Floor 1</h4>"));
    }

    #[test]
    fn test_room_geometry_and_label_position() {
        let floor = Floor {
            floor_name: "Ground Floor".to_string(),
            rooms: vec![room("Kitchen", 60.0, 40.0, 40.0, 60.0, "#ef4444")],
        };

        let markup = render_floor(&floor);
        assert!(markup.contains(
            "<rect class=\"room\" x=\"60\" y=\"40\" width=\"40\" height=\"60\" fill=\"#ef4444\" \
             fill-opacity=\"0.3\" stroke=\"#ef4444\" stroke-width=\"0.5\"/>"
        ));
        assert!(markup.contains("<text x=\"80\" y=\"70\""));
        assert!(markup.contains(">Kitchen</text>"));
    }

    #[test]
    fn test_out_of_range_rooms_pass_through() {
        let floor = Floor {
            floor_name: "Roof".to_string(),
            rooms: vec![room("Deck", 90.0, 95.0, 30.0, 12.5, "#fff")],
        };

        let markup = render_floor(&floor);
        assert!(markup.contains("x=\"90\" y=\"95\" width=\"30\" height=\"12.5\""));
    }

    #[test]
    fn test_names_are_escaped() {
        let floor = Floor {
            floor_name: "<b>G</b>".to_string(),
            rooms: vec![room("Bed & \"Bath\"", 0.0, 0.0, 10.0, 10.0, "red\" onclick=\"x")],
        };

        let markup = render_floor(&floor);
        assert!(markup.contains("&lt;b&gt;G&lt;/b&gt;"));
        assert!(markup.contains("Bed &amp; &quot;Bath&quot;"));
        assert!(!markup.contains("onclick=\"x"));
    }

    #[test]
    fn test_empty_blueprint() {
        assert_eq!(render_blueprint(&[]), "");
    }
}
