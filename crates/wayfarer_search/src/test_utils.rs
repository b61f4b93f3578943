use fxhash::FxHashMap;

use crate::{error::SearchError, problem::Problem};

// https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
const ROMANIA_ROADS: [(&str, &str, f64); 23] = [
    ("Oradea", "Zerind", 71.0),
    ("Oradea", "Sibiu", 151.0),
    ("Zerind", "Arad", 75.0),
    ("Arad", "Sibiu", 140.0),
    ("Arad", "Timisoara", 118.0),
    ("Timisoara", "Lugoj", 111.0),
    ("Lugoj", "Mehadia", 70.0),
    ("Mehadia", "Drobeta", 75.0),
    ("Drobeta", "Craiova", 120.0),
    ("Craiova", "RimnicuVilcea", 146.0),
    ("Craiova", "Pitesti", 138.0),
    ("RimnicuVilcea", "Pitesti", 97.0),
    ("RimnicuVilcea", "Sibiu", 80.0),
    ("Sibiu", "Fagaras", 99.0),
    ("Fagaras", "Bucharest", 211.0),
    ("Pitesti", "Bucharest", 101.0),
    ("Bucharest", "Giurgiu", 90.0),
    ("Bucharest", "Urziceni", 85.0),
    ("Urziceni", "Hirsova", 98.0),
    ("Hirsova", "Eforie", 86.0),
    ("Urziceni", "Vaslui", 142.0),
    ("Vaslui", "Iasi", 92.0),
    ("Iasi", "Neamt", 87.0),
];

/// Road map problem over an adjacency table, actions name the next city.
pub struct RoadMapProblem {
    initial: &'static str,
    goal: &'static str,
    roads: FxHashMap<&'static str, Vec<(&'static str, f64)>>,
}

impl RoadMapProblem {
    pub fn new(
        initial: &'static str,
        goal: &'static str,
        roads: &[(&'static str, &'static str, f64)],
        bidirectional: bool,
    ) -> Self {
        let mut adjacency: FxHashMap<&'static str, Vec<(&'static str, f64)>> =
            FxHashMap::default();
        for &(from, to, distance) in roads {
            adjacency.entry(from).or_default().push((to, distance));
            if bidirectional {
                adjacency.entry(to).or_default().push((from, distance));
            }
        }

        RoadMapProblem {
            initial,
            goal,
            roads: adjacency,
        }
    }

    pub fn romania(initial: &'static str, goal: &'static str) -> Self {
        Self::new(initial, goal, &ROMANIA_ROADS, true)
    }

    fn distance(&self, from: &str, to: &str) -> Option<f64> {
        self.roads
            .get(from)?
            .iter()
            .find(|(city, _)| *city == to)
            .map(|(_, distance)| *distance)
    }
}

impl Problem for RoadMapProblem {
    type State = &'static str;
    type Action = &'static str;
    type Actions<'a> = Box<dyn Iterator<Item = &'static str> + 'a>;

    fn initial(&self) -> &Self::State {
        &self.initial
    }

    fn goal(&self) -> &Self::State {
        &self.goal
    }

    fn actions<'a>(&'a self, state: &Self::State) -> Self::Actions<'a> {
        match self.roads.get(state) {
            Some(roads) => Box::new(roads.iter().map(|(city, _)| *city)),
            None => Box::new(std::iter::empty()),
        }
    }

    fn result(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, SearchError> {
        match self.distance(state, action) {
            Some(_) => Ok(*action),
            None => Err(SearchError::invalid_action(state, action)),
        }
    }

    fn action_cost(
        &self,
        state: &Self::State,
        _action: &Self::Action,
        next_state: &Self::State,
    ) -> Result<f64, SearchError> {
        self.distance(state, next_state)
            .ok_or_else(|| SearchError::missing_transition(state, next_state))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arithmetic {
    Increment,
    Double,
}

/// Reach `goal` from `initial` with `+1` and `*2` steps, one unit each.
/// States above `limit` have no actions so the space stays finite.
pub struct ArithmeticProblem {
    pub initial: u32,
    pub goal: u32,
    pub limit: u32,
}

impl Problem for ArithmeticProblem {
    type State = u32;
    type Action = Arithmetic;
    type Actions<'a> = std::vec::IntoIter<Arithmetic>;

    fn initial(&self) -> &Self::State {
        &self.initial
    }

    fn goal(&self) -> &Self::State {
        &self.goal
    }

    fn actions<'a>(&'a self, state: &Self::State) -> Self::Actions<'a> {
        if *state > self.limit {
            return Vec::new().into_iter();
        }
        vec![Arithmetic::Increment, Arithmetic::Double].into_iter()
    }

    fn result(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, SearchError> {
        Ok(match action {
            Arithmetic::Increment => state + 1,
            Arithmetic::Double => state * 2,
        })
    }
}
