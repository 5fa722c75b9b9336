use tracing::debug;

use crate::colors::Color;
use crate::console::Console;
use crate::map::Map;

/// The player or the NPC, drawn as a single character on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    pub x: i32,
    pub y: i32,
    pub char: char,
    pub color: Color,
}

impl Object {
    pub fn new(x: i32, y: i32, char: char, color: Color) -> Self {
        Object { x, y, char, color }
    }

    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_pos(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Move by the given amount, if the destination is not blocked.
    /// Returns whether the object moved.
    pub fn move_by(&mut self, dx: i32, dy: i32, map: &Map) -> bool {
        let (x, y) = (self.x + dx, self.y + dy);
        if is_blocked(x, y, map) {
            debug!(from = ?self.pos(), to = ?(x, y), "move blocked");
            return false;
        }
        self.set_pos(x, y);
        true
    }

    pub fn blocked_left(&self, map: &Map) -> bool {
        is_blocked(self.x - 1, self.y, map)
    }

    pub fn blocked_right(&self, map: &Map) -> bool {
        is_blocked(self.x + 1, self.y, map)
    }

    pub fn blocked_up(&self, map: &Map) -> bool {
        is_blocked(self.x, self.y - 1, map)
    }

    pub fn blocked_down(&self, map: &Map) -> bool {
        is_blocked(self.x, self.y + 1, map)
    }

    /// Set the color and then draw the character that represents this object at its position.
    pub fn draw(&self, con: &mut dyn Console) {
        con.set_default_foreground(self.color);
        con.put_char(self.x, self.y, self.char);
    }

    /// Erase the character that represents this object.
    pub fn clear(&self, con: &mut dyn Console) {
        con.put_char(self.x, self.y, ' ');
    }
}

/// The edge of the map is a wall.
fn is_blocked(x: i32, y: i32, map: &Map) -> bool {
    map.is_blocked(x, y).unwrap_or(true)
}

/// Handle to an object in `Objects`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Every object in the game, in the order they were registered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Objects {
    objects: Vec<Object>,
}

impl Objects {
    pub fn new() -> Self {
        Objects::default()
    }

    pub fn register(&mut self, object: Object) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        id
    }

    /// Panics if `id` came from another list; see `contains`.
    pub fn get(&self, id: ObjectId) -> &Object {
        &self.objects[id.0]
    }

    pub fn get_mut(&mut self, id: ObjectId) -> &mut Object {
        &mut self.objects[id.0]
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether `id` was handed out by this list.
    pub fn contains(&self, id: ObjectId) -> bool {
        id.0 < self.objects.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.objects.iter()
    }

    pub fn draw(&self, con: &mut dyn Console) {
        for object in &self.objects {
            object.draw(con);
        }
    }

    pub fn clear(&self, con: &mut dyn Console) {
        for object in &self.objects {
            object.clear(con);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::console::FrameBuffer;
    use crate::map::make_map;

    #[test]
    fn blocked_move_is_rejected() {
        let map = make_map(80, 45).unwrap();
        let mut object = Object::new(29, 22, '@', colors::WHITE);
        assert!(!object.move_by(1, 0, &map));
        assert_eq!(object.pos(), (29, 22));
    }

    #[test]
    fn open_move_is_committed() {
        let map = make_map(80, 45).unwrap();
        let mut object = Object::new(28, 22, '@', colors::WHITE);
        assert!(object.move_by(1, 0, &map));
        assert_eq!(object.pos(), (29, 22));
        assert!(object.move_by(0, -1, &map));
        assert_eq!(object.pos(), (29, 21));
    }

    #[test]
    fn cannot_walk_off_the_map() {
        let map = make_map(80, 45).unwrap();
        let mut object = Object::new(0, 0, '@', colors::WHITE);
        assert!(!object.move_by(-1, 0, &map));
        assert!(!object.move_by(0, -1, &map));
        assert_eq!(object.pos(), (0, 0));

        let mut object = Object::new(79, 44, '@', colors::WHITE);
        assert!(!object.move_by(1, 0, &map));
        assert!(!object.move_by(0, 1, &map));
        assert_eq!(object.pos(), (79, 44));
    }

    #[test]
    fn directional_probes_match_map() {
        let map = make_map(80, 45).unwrap();
        for &(x, y) in &[(31, 22), (29, 22), (30, 23), (30, 21), (10, 10), (51, 22)] {
            let object = Object::new(x, y, '@', colors::WHITE);
            assert_eq!(object.blocked_left(&map), map.is_blocked(x - 1, y).unwrap());
            assert_eq!(object.blocked_right(&map), map.is_blocked(x + 1, y).unwrap());
            assert_eq!(object.blocked_up(&map), map.is_blocked(x, y - 1).unwrap());
            assert_eq!(object.blocked_down(&map), map.is_blocked(x, y + 1).unwrap());
        }
        assert!(Object::new(31, 22, '@', colors::WHITE).blocked_left(&map));
        assert!(Object::new(30, 21, '@', colors::WHITE).blocked_down(&map));
    }

    #[test]
    fn probes_at_the_edge_report_blocked() {
        let map = make_map(80, 45).unwrap();
        let corner = Object::new(0, 0, '@', colors::WHITE);
        assert!(corner.blocked_left(&map));
        assert!(corner.blocked_up(&map));
        assert!(!corner.blocked_right(&map));
        assert!(!corner.blocked_down(&map));

        let corner = Object::new(79, 44, '@', colors::WHITE);
        assert!(corner.blocked_right(&map));
        assert!(corner.blocked_down(&map));
    }

    #[test]
    fn registry_keeps_creation_order() {
        let mut objects = Objects::new();
        let ids: Vec<_> = (0..5)
            .map(|i| objects.register(Object::new(i, 0, 'a', colors::WHITE)))
            .collect();
        assert_eq!(objects.len(), 5);
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(objects.get(*id).x, i as i32);
        }
        let xs: Vec<_> = objects.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3, 4]);
        assert!(objects.contains(ids[4]));

        let mut other = Objects::new();
        assert!(!other.contains(ids[0]));
        other.register(Object::new(0, 0, 'b', colors::WHITE));
        assert!(other.contains(ids[0]));
        assert!(!other.contains(ids[1]));
    }

    #[test]
    fn draw_and_clear_touch_each_object_once() {
        let mut objects = Objects::new();
        objects.register(Object::new(0, 0, '@', colors::WHITE));
        objects.register(Object::new(2, 0, 'n', colors::YELLOW));
        let mut con = FrameBuffer::new(3, 1);

        objects.draw(&mut con);
        assert_eq!(con.row(0), "@ n");
        assert_eq!(con.cell(0, 0).unwrap().foreground, colors::WHITE);
        assert_eq!(con.cell(2, 0).unwrap().foreground, colors::YELLOW);

        objects.clear(&mut con);
        assert_eq!(con.row(0), "   ");
    }
}
